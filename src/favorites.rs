//! Per-user favorite jingles.
//!
//! The registry is built once at startup, either from the built-in table or
//! from a favorites file, and is read-only afterwards.

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::song::Song;

/// Users known to the doorbell out of the box.
pub const DEFAULT_FAVORITES: &[(&str, &str)] = &[
    ("mrmcconnell10", "vitality"),
    ("brendan_mcconnell", "industry_baby"),
];

#[derive(Debug, Clone, Copy)]
pub struct Favorite<'a> {
    pub user: &'a str,
    pub song: &'a Song,
}

/// Ordered (user, song) pairs. Each user appears at most once.
#[derive(Debug, Clone)]
pub struct Favorites<'a> {
    entries: Vec<(String, &'a Song)>,
}

impl<'a> Favorites<'a> {
    /// Build from (user, song id) pairs, resolving ids against `catalog`.
    pub fn new<U, S>(catalog: &'a Catalog, pairs: impl IntoIterator<Item = (U, S)>) -> Result<Self>
    where
        U: Into<String>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, &'a Song)> = Vec::new();
        for (user, song_id) in pairs {
            let user = user.into();
            if entries.iter().any(|(u, _)| *u == user) {
                return Err(Error::DuplicateUser(user));
            }
            let song = catalog.require(song_id.as_ref())?;
            entries.push((user, song));
        }
        Ok(Self { entries })
    }

    pub fn builtin(catalog: &'a Catalog) -> Result<Self> {
        Self::new(catalog, DEFAULT_FAVORITES.iter().copied())
    }

    /// Load a favorites file.
    ///
    /// Format (one per line, optional comments with #):
    /// ```text
    /// # user: song id
    /// mrmcconnell10: vitality
    /// brendan_mcconnell: industry_baby
    /// ```
    pub fn load(path: &Path, catalog: &'a Catalog) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(input: &str, catalog: &'a Catalog) -> Result<Self> {
        let mut pairs = Vec::new();

        for (line_num, line) in input.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (user, song_id) = trimmed.split_once(':').ok_or_else(|| Error::Config {
                line: line_num + 1,
                message: format!("expected 'user: song', got '{}'", trimmed),
            })?;
            let (user, song_id) = (user.trim(), song_id.trim());
            if user.is_empty() || song_id.is_empty() {
                return Err(Error::Config {
                    line: line_num + 1,
                    message: "user and song must not be empty".into(),
                });
            }
            if catalog.get(song_id).is_none() {
                return Err(Error::Config {
                    line: line_num + 1,
                    message: format!("unknown song '{}'", song_id),
                });
            }
            pairs.push((user.to_string(), song_id.to_string()));
        }

        Self::new(catalog, pairs)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entry at position `index`, in file or table order.
    pub fn get(&self, index: usize) -> Option<Favorite<'_>> {
        self.entries.get(index).map(|(user, song)| Favorite {
            user: user.as_str(),
            song: *song,
        })
    }

    pub fn find(&self, user: &str) -> Option<&'a Song> {
        self.entries.iter().find(|(u, _)| u == user).map(|(_, song)| *song)
    }

    pub fn iter(&self) -> impl Iterator<Item = Favorite<'_>> {
        self.entries.iter().map(|(user, song)| Favorite {
            user: user.as_str(),
            song: *song,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_favorites() {
        let catalog = Catalog::builtin().unwrap();
        let favorites = Favorites::builtin(&catalog).unwrap();
        assert_eq!(favorites.count(), 2);

        let first = favorites.get(0).unwrap();
        assert_eq!(first.user, "mrmcconnell10");
        assert_eq!(first.song.id, "vitality");
        assert!(favorites.get(2).is_none());

        assert_eq!(favorites.find("brendan_mcconnell").unwrap().id, "industry_baby");
        assert!(favorites.find("nobody").is_none());
    }

    #[test]
    fn test_parse_file() {
        let catalog = Catalog::builtin().unwrap();
        let input = "\
# doorbell users
alice: imperial_march

bob : mean_one
";
        let favorites = Favorites::parse(input, &catalog).unwrap();
        let users: Vec<&str> = favorites.iter().map(|f| f.user).collect();
        assert_eq!(users, vec!["alice", "bob"]);
        assert_eq!(favorites.find("bob").unwrap().shift, 1);
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let result = Favorites::new(&catalog, [("alice", "vitality"), ("alice", "bad_apple")]);
        assert!(matches!(result, Err(Error::DuplicateUser(u)) if u == "alice"));
    }

    #[test]
    fn test_unknown_song_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let result = Favorites::new(&catalog, [("alice", "never_gonna")]);
        assert!(matches!(result, Err(Error::UnknownSong(_))));

        let result = Favorites::parse("alice: never_gonna", &catalog);
        assert!(matches!(result, Err(Error::Config { line: 1, .. })));
    }

    #[test]
    fn test_malformed_line() {
        let catalog = Catalog::builtin().unwrap();
        let result = Favorites::parse("# ok\nalice vitality", &catalog);
        assert!(matches!(result, Err(Error::Config { line: 2, .. })));

        let result = Favorites::parse(": vitality", &catalog);
        assert!(matches!(result, Err(Error::Config { line: 1, .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let catalog = Catalog::builtin().unwrap();
        let result = Favorites::load(Path::new("/nonexistent/favorites.txt"), &catalog);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
