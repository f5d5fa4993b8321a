//! Input abstraction for byte and file sources

use crate::error::{Error, ErrorKind, Result};

/// Input source abstraction
#[derive(Clone, Debug)]
pub struct Input<'a> {
    source: &'a [u8],
    filename: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create from byte slice
    pub const fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            source,
            filename: None,
        }
    }

    /// Set filename for error reporting
    pub const fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Get filename if set
    pub const fn filename(&self) -> Option<&str> {
        self.filename
    }

    /// Get length in bytes
    pub const fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if empty
    pub const fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Borrow the source as text.
    ///
    /// No byte-order-mark sniffing or `encoding=` handling happens here; the
    /// source must already be UTF-8.
    pub fn as_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.source).map_err(|err| {
            let kind = ErrorKind::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            };
            match self.filename() {
                Some(name) => {
                    let message = format!("{name}: {kind}");
                    Error::with_message(kind, message)
                }
                None => Error::new(kind),
            }
        })
    }

    /// Reject sources longer than `max` bytes (0 means unlimited)
    pub fn check_size(&self, max: usize) -> Result<()> {
        if max > 0 && self.len() > max {
            return Err(Error::new(ErrorKind::MaxSizeExceeded { max }));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_from_bytes() {
        let input = Input::from_bytes(b"<a/>");
        assert_eq!(input.len(), 4);
        assert!(!input.is_empty());
        assert_eq!(input.as_str(), Ok("<a/>"));
    }

    #[test]
    fn test_input_with_filename() {
        let input = Input::from_bytes(b"test").with_filename("test.xml");
        assert_eq!(input.filename(), Some("test.xml"));
    }

    #[test]
    fn test_empty_input() {
        let input = Input::from_bytes(b"");
        assert!(input.is_empty());
        assert_eq!(input.len(), 0);
    }

    #[test]
    fn test_invalid_utf8_names_file() {
        let bytes: &[u8] = &[b'<', b'a', b'>', 0xc3, 0x28];
        let input = Input::from_bytes(bytes).with_filename("broken.xml");
        let err = match input.as_str() {
            Ok(_) => return,
            Err(e) => e,
        };
        assert_eq!(err.kind(), &ErrorKind::InvalidUtf8 { valid_up_to: 3 });
        assert!(err.message().starts_with("broken.xml: "));
    }

    #[test]
    fn test_check_size() {
        let input = Input::from_bytes(b"<root></root>");
        assert!(input.check_size(0).is_ok());
        assert!(input.check_size(13).is_ok());
        assert_eq!(
            input.check_size(12).map_err(|e| e.kind().clone()),
            Err(ErrorKind::MaxSizeExceeded { max: 12 })
        );
    }
}
