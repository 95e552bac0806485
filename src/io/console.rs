use std::io::{self, Stderr, Stdout, Write};

/// The two user-facing sinks: progress goes to `out`, errors and warnings to `err`.
pub struct Console<O: Write, E: Write> {
    pub out: O,
    pub err: E,
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

#[cfg(test)]
impl Console<Vec<u8>, Vec<u8>> {
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn out_text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn err_text(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}
