#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Suppresses decorative output.
    ///
    /// `1` hides headers and the banner, `2` prints only the output fields.
    pub quiet: u8,
    pub no_banner: bool,
}
