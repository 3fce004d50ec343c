use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::{DateTime, Utc};

use crate::core::JobPayload;

pub fn all_jobs() -> Document {
    doc! {}
}

pub fn job_by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

pub fn most_recently_updated() -> Document {
    doc! { "updated_at": -1 }
}

/// Partial update, `created_at` is never part of it.
pub fn set_changes(changes: JobPayload, updated_at: DateTime<Utc>) -> Document {
    doc! {
        "$set": {
            "title": changes.title,
            "company": changes.company,
            "status": changes.status,
            "updated_at": bson::DateTime::from_chrono(updated_at),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_changes_leaves_created_at_alone() {
        let now = Utc::now();
        let changes = JobPayload {
            title: "AWS Engineer".to_owned(),
            company: "On the beach".to_owned(),
            status: "Rejected".to_owned(),
        };

        let update = set_changes(changes, now);
        let set = update.get_document("$set").unwrap();

        assert_eq!(set.get_str("title").unwrap(), "AWS Engineer");
        assert_eq!(set.get_str("company").unwrap(), "On the beach");
        assert_eq!(set.get_str("status").unwrap(), "Rejected");
        assert_eq!(
            *set.get_datetime("updated_at").unwrap(),
            bson::DateTime::from_chrono(now)
        );
        assert!(!set.contains_key("created_at"));
    }

    #[test]
    fn test_sort_is_descending_by_updated_at() {
        assert_eq!(most_recently_updated().get_i32("updated_at").unwrap(), -1);
    }

    #[test]
    fn test_job_by_id_filters_on_native_id() {
        let id = ObjectId::new();
        assert_eq!(job_by_id(id).get_object_id("_id").unwrap(), id);
    }
}
