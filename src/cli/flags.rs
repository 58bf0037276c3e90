#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub strength: bool,
    pub symbols: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
