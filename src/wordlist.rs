use crate::Error;
use std::fmt;
use std::fs::read_to_string;

/// The dictionary: an ordered list of uppercase candidate words.
///
/// Order and duplicates of the source are preserved, the search visits the
/// words in this order.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    /// The words, uppercase `A`..`Z` only.
    pub words: Vec<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

/// Case-fold `token` to uppercase, `None` if it holds anything but letters.
fn normalize(token: &str) -> Option<String> {
    if !token.is_empty() && token.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(token.to_ascii_uppercase())
    } else {
        None
    }
}

impl Wordlist {
    /// Read the wordlist from a file with whitespace separated words.
    /// If `skip_header` is true the first line of the file is ignored.
    ///
    /// Words are case-folded to uppercase. Tokens that are not made of
    /// letters only are dropped.
    /// ## Errors
    /// Fails if the wordfile can not be read.
    pub fn from_file(wordfile: &str, skip_header: bool) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let body = if skip_header {
            contents.splitn(2, '\n').nth(1).unwrap_or("")
        } else {
            &contents
        };
        let mut wordlist = Wordlist::from_tokens(body.split_whitespace());
        wordlist.wordfile = String::from(wordfile);
        log::info!("Read {}", wordlist);
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Examples
    /// ```
    /// use wordhunt_solver::Wordlist;
    /// let wordlist = Wordlist::from_words(&["cat", "Dog", "x-ray"]);
    /// assert_eq!(wordlist.words, ["CAT", "DOG"]);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Wordlist {
        Wordlist::from_tokens(words.iter().map(AsRef::as_ref))
    }

    fn from_tokens<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Wordlist {
        let mut words = Vec::new();
        let mut dropped = 0;
        for token in tokens {
            match normalize(token) {
                Some(word) => words.push(word),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!("Dropped {} words with non-letter characters", dropped);
        }
        Wordlist {
            words,
            wordfile: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<String> {
        self.words.iter()
    }
}
