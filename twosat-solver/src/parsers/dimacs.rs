//! A parser for 2-CNF instances given in the DIMACS CNF format. Given that DIMACS files can be very
//! large, the file is read in chunks, and the buffers for the current literal and clause are
//! re-used between clauses.
//!
//! Every clause must contain one or two literals: a unit clause `(l)` is read as `(l ∨ l)`, and any
//! other clause length is rejected with [`DimacsParseError::NotTwoCnf`].
//!
//! It should be noted that the parser should not be used as a DIMACS validator. Even though it
//! should only accept valid DIMACS files, the errors are not extremely detailed.
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::num::NonZeroI32;
use std::str::FromStr;

use thiserror::Error;
use twosat_core::DecisionError;
use twosat_core::Instance;
use twosat_core::InstanceBuilder;

/// A dimacs sink collects the clauses of the file, each with one or two literals.
pub trait DimacsSink: Sized {
    /// The underlying formula type.
    type Formula;

    /// Create an empty formula over `num_variables` variables.
    fn empty(num_variables: u32) -> Self;

    /// Add the clause `(a ∨ b)`; for a unit clause both literals are the same.
    fn add_pair(&mut self, a: NonZeroI32, b: NonZeroI32) -> Result<(), DimacsParseError>;

    /// Take the collected clauses and turn them into the underlying formula type.
    fn into_formula(self) -> Self::Formula;
}

#[derive(Debug, Error)]
pub enum DimacsParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing dimacs header")]
    MissingHeader,

    #[error("'{0}' is an invalid header")]
    InvalidHeader(String),

    #[error("multiple dimacs headers found")]
    DuplicateHeader,

    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("'{0}' is an invalid DIMACS literal")]
    InvalidLiteral(String),

    #[error("the last clause in the source is not terminated with a '0'")]
    UnterminatedClause,

    #[error("expected to parse {expected} clauses, but parsed {parsed}")]
    IncorrectClauseCount { expected: usize, parsed: usize },

    #[error("clause {clause} has {num_literals} literals, but only clauses with one or two literals are supported")]
    NotTwoCnf { clause: usize, num_literals: usize },

    #[error("the clauses do not fit the header: {0}")]
    InvalidInstance(#[from] DecisionError),
}

/// Reads a 2-CNF [`Instance`] from DIMACS CNF.
pub fn parse_cnf(source: impl Read) -> Result<Instance, DimacsParseError> {
    parse_cnf_into::<InstanceBuilder>(source)
}

pub fn parse_cnf_into<Sink: DimacsSink>(source: impl Read) -> Result<Sink::Formula, DimacsParseError> {
    let mut reader = BufReader::new(source);
    let mut parser = DimacsParser::<Sink>::new();

    loop {
        let num_bytes = {
            let data = reader.fill_buf()?;

            if data.is_empty() {
                return parser.complete();
            }

            parser.parse_chunk(data)?;
            data.len()
        };

        reader.consume(num_bytes);
    }
}

impl DimacsSink for InstanceBuilder {
    type Formula = Instance;

    fn empty(num_variables: u32) -> Self {
        Instance::builder(num_variables)
    }

    fn add_pair(&mut self, a: NonZeroI32, b: NonZeroI32) -> Result<(), DimacsParseError> {
        let _ = self.add_clause(a.get(), b.get())?;
        Ok(())
    }

    fn into_formula(self) -> Self::Formula {
        self.build()
    }
}

/// The DIMACS state machine; clauses are handed to the sink as soon as their terminating `0` is
/// read.
struct DimacsParser<Sink> {
    sink: Option<Sink>,
    header: Option<CnfHeader>,
    buffer: String,
    clause: Vec<NonZeroI32>,
    state: ParseState,
    parsed_clauses: usize,
}

enum ParseState {
    StartLine,
    Header,
    Comment,
    Literal,
    NegativeLiteral,
    Clause,
}

impl<Sink: DimacsSink> DimacsParser<Sink> {
    fn new() -> Self {
        DimacsParser {
            sink: None,
            header: None,
            buffer: String::new(),
            clause: vec![],
            state: ParseState::StartLine,
            parsed_clauses: 0,
        }
    }

    /// Parse the next chunk of bytes. This may start in the middle of parsing a clause or file
    /// header, and may end in such a state as well.
    fn parse_chunk(&mut self, chunk: &[u8]) -> Result<(), DimacsParseError> {
        for byte in chunk {
            match self.state {
                ParseState::StartLine => match byte {
                    b if b.is_ascii_whitespace() => {} // Continue consuming whitespace.

                    b'p' => {
                        self.state = ParseState::Header;
                        self.buffer.clear();
                        self.buffer.push('p');
                    }

                    b'c' => {
                        self.state = ParseState::Comment;
                    }

                    b @ b'1'..=b'9' => {
                        self.start_literal(b, true);
                    }

                    // An empty clause, which is rejected when it is finished.
                    b'0' => self.finish_clause()?,

                    b'-' => self.start_literal(&b'-', false),

                    b => return Err(DimacsParseError::UnexpectedCharacter(*b as char)),
                },

                ParseState::Header => match byte {
                    b'\n' => {
                        self.init_formula()?;
                        self.state = ParseState::StartLine;
                    }

                    b => self.buffer.push(*b as char),
                },

                ParseState::Comment => {
                    if *byte == b'\n' {
                        self.state = ParseState::StartLine;
                    }
                }

                ParseState::Literal => match byte {
                    b if b.is_ascii_whitespace() => {
                        self.finish_literal()?;
                    }

                    b @ b'0'..=b'9' => self.buffer.push(*b as char),

                    b => return Err(DimacsParseError::UnexpectedCharacter(*b as char)),
                },

                ParseState::NegativeLiteral => match byte {
                    b @ b'1'..=b'9' => {
                        self.buffer.push(*b as char);
                        self.state = ParseState::Literal;
                    }

                    b => return Err(DimacsParseError::UnexpectedCharacter(*b as char)),
                },

                ParseState::Clause => match byte {
                    b'0' => self.finish_clause()?,

                    // A new-line does not terminate the clause; the literals read so far are kept
                    // until the terminating '0' is found, possibly after comment lines.
                    b'\n' => self.state = ParseState::StartLine,
                    b if b.is_ascii_whitespace() => {}

                    b @ b'1'..=b'9' => self.start_literal(b, true),
                    b'-' => self.start_literal(&b'-', false),

                    b => return Err(DimacsParseError::UnexpectedCharacter(*b as char)),
                },
            }
        }

        Ok(())
    }

    fn start_literal(&mut self, b: &u8, is_positive: bool) {
        self.state = if is_positive {
            ParseState::Literal
        } else {
            ParseState::NegativeLiteral
        };

        self.buffer.clear();
        self.buffer.push(*b as char);
    }

    fn complete(mut self) -> Result<Sink::Formula, DimacsParseError> {
        // The source may end without a trailing new-line or whitespace.
        match self.state {
            ParseState::Header => self.init_formula()?,
            ParseState::Literal => self.finish_literal()?,
            ParseState::NegativeLiteral => {
                return Err(DimacsParseError::InvalidLiteral(self.buffer.clone()))
            }
            ParseState::StartLine | ParseState::Comment | ParseState::Clause => {}
        }

        let (Some(sink), Some(header)) = (self.sink, self.header) else {
            return Err(DimacsParseError::MissingHeader);
        };

        if !self.clause.is_empty() {
            Err(DimacsParseError::UnterminatedClause)
        } else if header.num_clauses != self.parsed_clauses {
            Err(DimacsParseError::IncorrectClauseCount {
                expected: header.num_clauses,
                parsed: self.parsed_clauses,
            })
        } else {
            Ok(sink.into_formula())
        }
    }

    fn init_formula(&mut self) -> Result<(), DimacsParseError> {
        if self.header.is_some() {
            return Err(DimacsParseError::DuplicateHeader);
        }

        let header = self.buffer.trim().parse::<CnfHeader>()?;
        self.sink = Some(Sink::empty(header.num_variables));
        self.header = Some(header);

        Ok(())
    }

    fn finish_literal(&mut self) -> Result<(), DimacsParseError> {
        let literal = self
            .buffer
            .parse::<i32>()
            .ok()
            .and_then(NonZeroI32::new)
            .ok_or_else(|| DimacsParseError::InvalidLiteral(self.buffer.clone()))?;

        self.clause.push(literal);
        self.state = ParseState::Clause;

        Ok(())
    }

    fn finish_clause(&mut self) -> Result<(), DimacsParseError> {
        let sink = self.sink.as_mut().ok_or(DimacsParseError::MissingHeader)?;

        self.parsed_clauses += 1;
        match self.clause[..] {
            [literal] => sink.add_pair(literal, literal)?,
            [a, b] => sink.add_pair(a, b)?,
            _ => {
                return Err(DimacsParseError::NotTwoCnf {
                    clause: self.parsed_clauses,
                    num_literals: self.clause.len(),
                })
            }
        }
        self.clause.clear();

        Ok(())
    }
}

struct CnfHeader {
    num_variables: u32,
    num_clauses: usize,
}

impl FromStr for CnfHeader {
    type Err = DimacsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.starts_with("p cnf ") {
            return Err(DimacsParseError::InvalidHeader(s.to_string()));
        }

        let mut components = s.split_ascii_whitespace().skip(2);

        let num_variables = next_header_component::<u32>(&mut components, s)?;
        let num_clauses = next_header_component::<usize>(&mut components, s)?;

        if components.next().is_some() {
            return Err(DimacsParseError::InvalidHeader(s.to_string()));
        }

        Ok(Self {
            num_variables,
            num_clauses,
        })
    }
}

fn next_header_component<'a, Num: FromStr>(
    components: &mut impl Iterator<Item = &'a str>,
    header: &str,
) -> Result<Num, DimacsParseError> {
    components
        .next()
        .ok_or_else(|| DimacsParseError::InvalidHeader(header.to_string()))?
        .parse::<Num>()
        .map_err(|_| DimacsParseError::InvalidHeader(header.to_string()))
}
