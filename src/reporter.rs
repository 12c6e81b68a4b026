use crate::error::Error;

/// A sink for lexical defects. The scanner calls `report` once per defect
/// and keeps going; what to do with them is up to the implementor.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

impl <R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: usize, message: &str) {
        (**self).report(line, message)
    }
}

/// Collects every reported defect in order.
#[derive(Debug, Default)]
pub struct ErrorLog {
    errors: Vec<Error>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl Reporter for ErrorLog {
    fn report(&mut self, line: usize, message: &str) {
        self.errors.push(Error::lexical(line, message));
    }
}
