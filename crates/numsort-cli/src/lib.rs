use std::path::PathBuf;

/// Sort lines, comparing runs of digits by their numeric value
#[derive(argh::FromArgs)]
#[argh(help_triggers("-h", "--help"))]
pub struct Args {
    /// files to read lines from, `-` or nothing reads stdin
    #[argh(positional)]
    pub files: Vec<PathBuf>,
    /// reverse the result
    #[argh(switch, short = 'r', long = "reverse")]
    pub reverse: bool,
    /// only output the first of equal lines
    #[argh(switch, short = 'u', long = "unique")]
    pub unique: bool,
    /// always sort on the rayon thread pool
    #[argh(switch, short = 'p', long = "parallel")]
    pub parallel: bool,
    /// write the result to this file instead of stdout
    #[argh(option, short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// check that the input is already sorted
    #[argh(switch, short = 'c', long = "check")]
    pub check: bool,
    /// options `error`, `warn`, `info`, `debug` or `trace`
    #[argh(option, long = "log-level")]
    pub log_level: Option<String>,
    /// initialize default config
    #[argh(switch, long = "init")]
    pub init: bool,
    /// overwrite existing config
    #[argh(switch, long = "overwrite")]
    pub overwrite: bool,
}

pub fn parse() -> Args {
    argh::from_env()
}
