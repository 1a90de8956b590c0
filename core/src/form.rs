use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::count::{parse_count, DEFAULT_MAX_COUNT};
use crate::model::{FormItem, ItemField, ItemRecord};
use crate::storage::ItemStore;
use crate::targets;
use crate::Error;

pub const SAVE_SUCCESS_MESSAGE: &str = "Data saved successfully!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: usize,
    pub destination: String,
}

#[derive(Debug, Clone)]
pub enum FormAction {
    SetCount(String),
    EditField {
        index: usize,
        field: ItemField,
        value: String,
    },
    Submit,
}

#[derive(Debug)]
pub enum FormOutcome {
    Regenerated { count: usize },
    Edited,
    Saved(SaveReport),
    Rejected(Error),
}

impl FormOutcome {
    /// Text for the result popup, if this outcome produces one.
    pub fn notice(&self) -> Option<String> {
        match self {
            FormOutcome::Saved(_) => Some(SAVE_SUCCESS_MESSAGE.to_string()),
            FormOutcome::Rejected(error) => Some(error.user_summary()),
            FormOutcome::Regenerated { .. } | FormOutcome::Edited => None,
        }
    }
}

/// The dynamic item form: N groups of name/description/link plus the set of
/// fields flagged by the last failed submit.
#[derive(Debug, Clone)]
pub struct ItemForm {
    items: Vec<FormItem>,
    flagged: HashSet<(usize, ItemField)>,
    max_count: usize,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    pub fn new() -> Self {
        Self::with_max_count(DEFAULT_MAX_COUNT)
    }

    pub fn with_max_count(max_count: usize) -> Self {
        Self {
            items: vec![FormItem::default()],
            flagged: HashSet::new(),
            max_count: max_count.max(1),
        }
    }

    pub fn items(&self) -> &[FormItem] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Discards every value and flag, then allocates `count` empty groups.
    pub fn set_count(&mut self, count: usize) -> usize {
        let count = count.clamp(1, self.max_count);
        self.items = vec![FormItem::default(); count];
        self.flagged.clear();
        debug!(target: targets::FORM, count, "Item groups regenerated");
        count
    }

    pub fn set_count_input(&mut self, raw: &str) -> usize {
        self.set_count(parse_count(raw, self.max_count))
    }

    /// Stores the new value and drops the field's flag, whatever the value is.
    pub fn set_field(&mut self, index: usize, field: ItemField, value: impl Into<String>) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            warn!(target: targets::FORM, index, "Edit for unknown item ignored");
            return false;
        };
        *item.field_mut(field) = value.into();
        self.flagged.remove(&(index, field));
        true
    }

    pub fn is_flagged(&self, index: usize, field: ItemField) -> bool {
        self.flagged.contains(&(index, field))
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// Validates every group; writes all of them or nothing.
    pub fn submit(&mut self, store: &dyn ItemStore) -> Result<SaveReport, Error> {
        let mut invalid_items = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let empty = item.empty_fields();
            if empty.is_empty() {
                continue;
            }
            invalid_items.push(index + 1);
            for field in empty {
                self.flagged.insert((index, field));
            }
        }

        if !invalid_items.is_empty() {
            let error = Error::IncompleteItems {
                items: invalid_items,
                empty_fields: self.flagged.len(),
            };
            warn!(target: targets::FORM, "Save blocked: {}", error.technical_detail());
            return Err(error);
        }

        let records: Vec<ItemRecord> = self.items.iter().map(FormItem::to_record).collect();
        store.save(&records)?;
        info!(target: targets::FORM, count = records.len(), "Form saved");
        Ok(SaveReport {
            saved: records.len(),
            destination: store.describe(),
        })
    }

    pub fn apply(&mut self, action: FormAction, store: &dyn ItemStore) -> FormOutcome {
        match action {
            FormAction::SetCount(raw) => FormOutcome::Regenerated {
                count: self.set_count_input(&raw),
            },
            FormAction::EditField {
                index,
                field,
                value,
            } => {
                self.set_field(index, field, value);
                FormOutcome::Edited
            }
            FormAction::Submit => match self.submit(store) {
                Ok(report) => FormOutcome::Saved(report),
                Err(error) => FormOutcome::Rejected(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryItemStore;

    fn fill(form: &mut ItemForm, index: usize, values: (&str, &str, &str)) {
        form.set_field(index, ItemField::Name, values.0);
        form.set_field(index, ItemField::Description, values.1);
        form.set_field(index, ItemField::Link, values.2);
    }

    #[test]
    fn starts_with_one_empty_group() {
        let form = ItemForm::new();
        assert_eq!(form.count(), 1);
        assert_eq!(form.items()[0], FormItem::default());
    }

    #[test]
    fn count_change_discards_values_and_flags() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();
        form.set_count(2);
        form.set_field(0, ItemField::Name, "kept?");
        assert!(form.submit(&store).is_err());
        assert!(form.flagged_count() > 0);

        form.set_count_input("3");
        assert_eq!(form.count(), 3);
        assert!(form.items().iter().all(|item| *item == FormItem::default()));
        assert_eq!(form.flagged_count(), 0);
    }

    #[test]
    fn non_numeric_count_becomes_one() {
        let mut form = ItemForm::new();
        form.set_count(4);
        assert_eq!(form.set_count_input("four"), 1);
        assert_eq!(form.set_count_input("-2"), 1);
        assert_eq!(form.count(), 1);
    }

    #[test]
    fn saves_trimmed_records_in_render_order() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();
        form.set_count(3);
        fill(&mut form, 0, ("A", "a", "http://a"));
        fill(&mut form, 1, (" B ", "b", "http://b"));
        fill(&mut form, 2, ("C", "c\n", "http://c"));

        let report = form.submit(&store).expect("save");
        assert_eq!(report.saved, 3);

        let saved = store.last_saved().expect("saved records");
        let names: Vec<&str> = saved.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(saved[2].desc, "c");
    }

    #[test]
    fn one_incomplete_item_blocks_the_whole_save() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();
        form.set_count(3);
        fill(&mut form, 0, ("A", "a", "http://a"));
        fill(&mut form, 1, ("", "b", "http://b"));
        fill(&mut form, 2, ("C", "c", "http://c"));

        for _ in 0..3 {
            let error = form.submit(&store).expect_err("incomplete");
            match error {
                Error::IncompleteItems { items, empty_fields } => {
                    assert_eq!(items, vec![2]);
                    assert_eq!(empty_fields, 1);
                }
                other => panic!("unexpected error {other:?}"),
            }
        }

        assert_eq!(store.save_count(), 0);
        assert!(form.is_flagged(1, ItemField::Name));
        assert!(!form.is_flagged(1, ItemField::Description));
        assert!(!form.is_flagged(0, ItemField::Name));
    }

    #[test]
    fn every_empty_field_is_flagged() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();
        form.set_count(2);
        form.set_field(0, ItemField::Name, "only name");

        assert!(form.submit(&store).is_err());
        assert!(!form.is_flagged(0, ItemField::Name));
        assert!(form.is_flagged(0, ItemField::Description));
        assert!(form.is_flagged(0, ItemField::Link));
        for field in ItemField::ALL {
            assert!(form.is_flagged(1, field));
        }
        assert_eq!(form.flagged_count(), 5);
    }

    #[test]
    fn editing_clears_flag_even_with_blank_value() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();
        assert!(form.submit(&store).is_err());
        assert!(form.is_flagged(0, ItemField::Link));

        form.set_field(0, ItemField::Link, "   ");
        assert!(!form.is_flagged(0, ItemField::Link));
        assert!(form.is_flagged(0, ItemField::Name));
    }

    #[test]
    fn edits_out_of_range_are_ignored() {
        let mut form = ItemForm::new();
        assert!(!form.set_field(5, ItemField::Name, "x"));
        assert_eq!(form.items()[0].name, "");
    }

    #[test]
    fn store_failure_is_reported() {
        let store = MemoryItemStore::new();
        store.fail_saves("disk full");
        let mut form = ItemForm::new();
        fill(&mut form, 0, ("A", "a", "http://a"));

        let outcome = form.apply(FormAction::Submit, &store);
        assert!(matches!(outcome, FormOutcome::Rejected(Error::StorageIo { .. })));
        assert_eq!(
            outcome.notice().as_deref(),
            Some("Failed to save the data file.")
        );
    }

    #[test]
    fn action_table_drives_the_form() {
        let store = MemoryItemStore::new();
        let mut form = ItemForm::new();

        let outcome = form.apply(FormAction::SetCount("2".to_string()), &store);
        assert!(matches!(outcome, FormOutcome::Regenerated { count: 2 }));
        assert!(outcome.notice().is_none());

        for index in 0..2 {
            for field in ItemField::ALL {
                form.apply(
                    FormAction::EditField {
                        index,
                        field,
                        value: format!("{field} {index}"),
                    },
                    &store,
                );
            }
        }

        let outcome = form.apply(FormAction::Submit, &store);
        assert_eq!(outcome.notice().as_deref(), Some(SAVE_SUCCESS_MESSAGE));
        assert_eq!(store.last_saved().map(|records| records.len()), Some(2));
    }
}
