use std::path::Path;

/// The instance formats understood by the solver, recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileFormat {
    /// `*.cnf`: DIMACS CNF with clauses of one or two literals
    CnfDimacs,
    /// `*.txt` or `*.2sat`: the number of variables followed by one pair of literals per line
    Pairs,
}

impl FileFormat {
    pub(crate) fn of(path: &Path) -> Option<FileFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("cnf") => Some(FileFormat::CnfDimacs),
            Some("txt") | Some("2sat") => Some(FileFormat::Pairs),
            _ => None,
        }
    }
}
