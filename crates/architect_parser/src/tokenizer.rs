//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A lowercase word
    Word(String),
    /// A quoted phrase, lowercased, naming one thing
    QuotedString(String),
    /// End of input
    End,
}

impl InputToken {
    /// Returns the token text, or `None` for [`InputToken::End`].
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            InputToken::Word(s) | InputToken::QuotedString(s) => Some(s),
            InputToken::End => None,
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation, except a `?` standing on its own
    /// - Keeps quoted phrases as single tokens
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.chars();
        let mut current_word = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    flush(&mut tokens, &mut current_word);
                    let mut quoted = String::new();
                    for c in chars.by_ref() {
                        if c == '"' {
                            break;
                        }
                        quoted.push(c);
                    }
                    let quoted = quoted.trim().to_lowercase();
                    if !quoted.is_empty() {
                        tokens.push(InputToken::QuotedString(quoted));
                    }
                }
                c if c.is_whitespace() => flush(&mut tokens, &mut current_word),
                '?' if current_word.is_empty() => tokens.push(InputToken::Word("?".to_string())),
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' => {}
                _ => current_word.push(ch),
            }
        }

        flush(&mut tokens, &mut current_word);
        tokens.push(InputToken::End);
        tokens
    }

    /// Tokenizes input and returns just the token texts.
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        Self::tokenize(input)
            .iter()
            .filter_map(InputToken::text)
            .map(str::to_string)
            .collect()
    }
}

fn flush(tokens: &mut Vec<InputToken>, word: &mut String) {
    if !word.is_empty() {
        tokens.push(InputToken::Word(word.to_lowercase()));
        word.clear();
    }
}
