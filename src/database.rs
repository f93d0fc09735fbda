use std::path::Path;

use anyhow::{Context, Result};
use sled::{Db, Tree};
use tracing::info;

use crate::{handoff::Handoff, session::FilterSessions};

const HANDOFF_TREE: &str = "handoff";
const FILTERS_TREE: &str = "filters";

#[derive(Clone)]
pub(crate) struct Database {
    db: Db,
    handoff: Tree,
    filters: Tree,
}

impl Database {
    fn connect_db(path: &Path) -> Result<Db> {
        sled::open(path).with_context(|| format!("cannot open store at {}", path.display()))
    }

    fn connect_tree(db: &Db, name: &str) -> Result<Tree> {
        db.open_tree(name)
            .with_context(|| format!("cannot open tree `{name}`"))
    }

    pub(crate) fn connect(path: &Path) -> Result<Database> {
        let db = Database::connect_db(path)?;
        let handoff = Database::connect_tree(&db, HANDOFF_TREE)?;
        let filters = Database::connect_tree(&db, FILTERS_TREE)?;
        info!("Store opened at {}", path.display());
        Ok(Database {
            db,
            handoff,
            filters,
        })
    }

    /// The transient channel used to pass comparisons between views.
    pub(crate) fn handoff(&self) -> Handoff {
        Handoff::new(self.handoff.clone())
    }

    /// Per-session filter state of the listing pages.
    pub(crate) fn filter_sessions(&self) -> FilterSessions {
        FilterSessions::new(self.filters.clone())
    }

    /// Drops pending hand-offs and saved filters. Neither outlives a server
    /// run. Returns how many entries were dropped.
    pub(crate) fn clear_transient(&self) -> Result<usize> {
        let mut dropped = 0;
        for tree in [&self.handoff, &self.filters] {
            dropped += tree.len();
            tree.clear()?;
        }
        Ok(dropped)
    }

    pub(crate) async fn flush(&self) -> Result<()> {
        self.db.flush_async().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, record::Record};

    #[test]
    fn clear_transient_drops_handoffs_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(dir.path()).unwrap();
        let records: Vec<Record> = catalog::trials()[..2]
            .iter()
            .cloned()
            .map(Record::from)
            .collect();
        db.handoff().deliver("a", &records).unwrap();
        db.handoff().deliver("b", &records).unwrap();

        db.filter_sessions()
            .update("a", |model| {
                model.set_search_text("pembro");
                Ok(())
            })
            .unwrap();

        assert_eq!(db.clear_transient().unwrap(), 3);
        assert!(db.handoff().take("a").is_err());
        assert!(db
            .filter_sessions()
            .load("a")
            .unwrap()
            .state()
            .search_text
            .is_empty());
    }

    #[tokio::test]
    async fn reopen_after_flush() {
        let dir = tempfile::tempdir().unwrap();
        {
            let db = Database::connect(dir.path()).unwrap();
            db.flush().await.unwrap();
        }
        assert!(Database::connect(dir.path()).is_ok());
    }
}
