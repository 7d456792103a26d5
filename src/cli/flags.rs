use crate::config::LanguageMode;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub mixed_case: bool,
    pub special: bool,
    pub length: Option<usize>,
    pub language: Option<LanguageMode>,
    pub digits: Option<String>,
}
