use crate::codebook::CodeBook;
use crate::error::{Error, Result};

/// Maps text to a string of `0`/`1` digits using a [`CodeBook`].
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    code_book: &'a CodeBook,
}

impl<'a> Encoder<'a> {
    pub fn new(code_book: &'a CodeBook) -> Self {
        Encoder { code_book }
    }

    /// Concatenate the code of every symbol of `text`, in order.
    ///
    /// Fails on the first symbol the code book does not know; nothing is
    /// returned for the symbols before it.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut encoded = String::with_capacity(self.encoded_len(text)?);
        for symbol in text.chars() {
            // encoded_len already checked every symbol
            if let Some(code) = self.code_book.get(symbol) {
                encoded.push_str(code);
            }
        }
        Ok(encoded)
    }

    /// Number of digits [`Encoder::encode`] would produce for `text`.
    pub fn encoded_len(&self, text: &str) -> Result<usize> {
        text.chars().enumerate().try_fold(0, |len, (position, symbol)| {
            self.code_book
                .get(symbol)
                .map(|code| len + code.len())
                .ok_or(Error::UnknownSymbol { symbol, position })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn book_of(text: &str) -> CodeBook {
        CodeBook::from_tree(&HuffmanTree::build(&FrequencyTable::from_text(text)), '0')
    }

    #[test]
    fn test_encode_concatenates_codes() {
        // c=0, a=10, b=11
        let book = book_of("abcc");
        let encoder = Encoder::new(&book);
        assert_eq!(encoder.encode("cab").unwrap(), "01011");
        assert_eq!(encoder.encoded_len("cab").unwrap(), 5);
    }

    #[test]
    fn test_encode_empty_text() {
        let book = book_of("abcc");
        assert_eq!(Encoder::new(&book).encode("").unwrap(), "");
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let book = book_of("abcc");
        let err = Encoder::new(&book).encode("abZc").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownSymbol {
                symbol: 'Z',
                position: 2
            }
        );
    }

    #[test]
    fn test_empty_book_rejects_any_symbol() {
        let book = book_of("");
        assert!(matches!(
            Encoder::new(&book).encode("a"),
            Err(Error::UnknownSymbol { symbol: 'a', position: 0 })
        ));
    }
}
