use super::*;
use crate::Error;
use std::fs::File;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::sync::PoisonError;
use std::sync::RwLock;

/// League store backed by a single random-access resource.
///
/// The resource is read once, at construction. Every win rewrites the full
/// snapshot through a [`Tape`], so the resource always holds a
/// complete, valid league as of the last successful write.
#[derive(Debug)]
pub struct FileStore<R = File> {
    ledger: RwLock<Ledger<R>>,
}

#[derive(Debug)]
struct Ledger<R> {
    league: League,
    tape: Tape<R>,
}

impl FileStore<File> {
    /// Open (creating if absent) the league file at `path`.
    pub fn open<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .inspect_err(|e| log::error!("problem opening {}: {}", path.display(), e))
            .map_err(Error::from)
            .and_then(Self::new)
            .inspect(|s| log::info!("loaded {} players from {}", s.league().len(), path.display()))
    }
}

impl<R> FileStore<R>
where
    R: Resource,
{
    /// Load the league from `resource`, seeding an empty one with `[]`.
    pub fn new(mut resource: R) -> Result<Self, Error> {
        resource.seek(SeekFrom::Start(0))?;
        if resource.size()? == 0 {
            resource.write_all(b"[]")?;
            resource.flush()?;
            resource.seek(SeekFrom::Start(0))?;
        }
        let league = League::load(&mut resource)?;
        let tape = Tape::new(resource);
        Ok(Self {
            ledger: RwLock::new(Ledger { league, tape }),
        })
    }
}

impl<R> Store for FileStore<R>
where
    R: Resource,
{
    fn league(&self) -> League {
        self.ledger
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .league
            .clone()
    }

    fn score(&self, name: &str) -> Wins {
        self.ledger
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .league
            .wins(name)
    }

    fn record(&self, name: &str) {
        let mut guard = self.ledger.write().unwrap_or_else(PoisonError::into_inner);
        let Ledger { league, tape } = &mut *guard;
        if !league.record(name) {
            return;
        }
        match league
            .encode()
            .and_then(|bytes| tape.write(&bytes).map_err(Error::from))
        {
            Ok(n) => log::debug!("recorded win for {} ({} bytes)", name, n),
            Err(e) => log::error!("win for {} not persisted: {}", name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::Player;
    use std::io::Cursor;
    use std::sync::Arc;

    fn seeded(json: &str) -> FileStore<Cursor<Vec<u8>>> {
        FileStore::new(Cursor::new(json.as_bytes().to_vec())).unwrap()
    }

    fn contents(store: &FileStore<Cursor<Vec<u8>>>) -> Vec<u8> {
        store.ledger.read().unwrap().tape.get_ref().get_ref().clone()
    }

    #[test]
    fn empty_resource_is_seeded() {
        let store = seeded("");
        assert!(store.league().is_empty());
        assert_eq!(contents(&store), b"[]");
    }

    #[test]
    fn malformed_resource_fails_construction() {
        let result = FileStore::new(Cursor::new(b"[{\"Name\": 1".to_vec()));
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn unknown_player_scores_zero() {
        let store = seeded(r#"[{"Name":"Cleo","Wins":10}]"#);
        assert_eq!(store.score("Cleo"), 10);
        assert_eq!(store.score("Chris"), 0);
    }

    #[test]
    fn three_wins_from_empty() {
        let store = seeded("");
        (0..3).for_each(|_| store.record("Andre"));
        assert_eq!(store.score("Andre"), 3);
        assert_eq!(store.league().players(), &[Player::new("Andre", 3)]);
    }

    #[test]
    fn wins_rerank_seeded_league() {
        let store = seeded(r#"[{"Name":"Andre","Wins":20},{"Name":"Chris","Wins":10}]"#);
        (0..5).for_each(|_| store.record("Chris"));
        assert_eq!(
            store.league().players(),
            &[Player::new("Andre", 20), Player::new("Chris", 15)]
        );
    }

    #[test]
    fn every_win_writes_full_snapshot() {
        let store = seeded(r#"[{"Name":"Andre","Wins":20},{"Name":"Chris","Wins":10}]"#);
        store.record("Bea");
        let reloaded = League::load(contents(&store).as_slice()).unwrap();
        assert_eq!(reloaded, store.league());
        assert_eq!(reloaded.total(), 31);
    }

    #[test]
    fn league_reads_are_stable() {
        let store = seeded(r#"[{"Name":"Andre","Wins":2},{"Name":"Chris","Wins":2}]"#);
        assert_eq!(store.league(), store.league());
    }

    #[test]
    fn concurrent_wins_are_all_counted() {
        let store = Arc::new(seeded(""));
        let names = ["Andre", "Bea", "Cleo", "Dev"];
        let handles = names
            .iter()
            .copied()
            .map(|name| {
                let store = store.clone();
                std::thread::spawn(move || (0..25).for_each(|_| store.record(name)))
            })
            .collect::<Vec<_>>();
        handles.into_iter().for_each(|h| h.join().unwrap());
        names.iter().for_each(|name| assert_eq!(store.score(name), 25));
        let reloaded = League::load(contents(&store).as_slice()).unwrap();
        assert_eq!(reloaded.total(), 100);
    }

    #[test]
    fn file_round_trips_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db.json");
        {
            let store = FileStore::open(&path).unwrap();
            assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
            store.record("Chris");
            store.record("Andre");
            store.record("Andre");
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.league().players(),
            &[Player::new("Andre", 2), Player::new("Chris", 1)]
        );
    }

    #[test]
    fn tie_order_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db.json");
        {
            let store = FileStore::open(&path).unwrap();
            ["Andre", "Bea", "Bea"].iter().for_each(|n| store.record(n));
        }
        let store = FileStore::open(&path).unwrap();
        store.record("Andre");
        assert_eq!(
            store.league().players(),
            &[Player::new("Andre", 2), Player::new("Bea", 2)]
        );
    }

    #[test]
    fn capped_win_leaves_resource_alone() {
        let json = format!(r#"[{{"Name":"Max","Wins":{}}}]"#, Wins::MAX);
        let store = seeded(&json);
        store.record("Max");
        assert_eq!(store.score("Max"), Wins::MAX);
        assert_eq!(contents(&store), json.as_bytes());
    }

    #[test]
    fn open_rejects_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.db.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
