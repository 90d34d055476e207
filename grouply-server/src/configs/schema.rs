use crate::models::{GroupTable, MemberTable, Table};

pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    /// Order tables so every table comes after the tables it references.
    fn sort_tables(tables: &mut Vec<Box<dyn Table>>) {
        let mut remaining = std::mem::take(tables);
        let mut pending_deps: Vec<_> = remaining.iter().map(|t| t.dependencies()).collect();
        let mut sorted = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let ready: Vec<usize> = pending_deps
                .iter()
                .enumerate()
                .filter(|(_, deps)| deps.is_empty())
                .map(|(i, _)| i)
                .collect();

            assert!(
                !ready.is_empty(),
                "Circular dependency detected or unresolved dependencies exist."
            );

            for &index in ready.iter().rev() {
                let table = remaining.swap_remove(index);
                let _ = pending_deps.swap_remove(index);
                sorted.push(table);
            }

            for deps in pending_deps.iter_mut() {
                deps.retain(|dep| !sorted.iter().any(|resolved| resolved.name() == *dep));
            }
        }

        *tables = sorted;
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![Box::new(GroupTable), Box::new(MemberTable)])
    }
}
