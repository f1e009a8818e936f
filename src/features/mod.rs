pub mod pinyin;
