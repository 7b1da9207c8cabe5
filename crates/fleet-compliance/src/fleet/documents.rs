use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::{DocumentCategory, MANDATORY_DOCUMENTS};
use super::domain::{DocumentUpload, Vehicle, VehicleDocument};

/// Raised when a vehicle lacks one or more mandatory basic documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing mandatory documents: {}", names.join(", "))]
pub struct MissingDocumentsError {
    pub names: Vec<&'static str>,
}

/// Documents stored for one category, keyed by document name.
///
/// Serialized as a plain list; duplicate names in inbound data collapse to the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<VehicleDocument>", into = "Vec<VehicleDocument>")]
pub struct CategoryDocuments {
    entries: BTreeMap<String, VehicleDocument>,
}

impl CategoryDocuments {
    pub fn get(&self, name: &str) -> Option<&VehicleDocument> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleDocument> {
        self.entries.values()
    }

    fn insert(&mut self, document: VehicleDocument) -> Option<VehicleDocument> {
        self.entries.insert(document.name.clone(), document)
    }

    fn remove(&mut self, name: &str) -> Option<VehicleDocument> {
        self.entries.remove(name)
    }
}

impl From<Vec<VehicleDocument>> for CategoryDocuments {
    fn from(documents: Vec<VehicleDocument>) -> Self {
        let mut collection = Self::default();
        for document in documents {
            collection.insert(document);
        }
        collection
    }
}

impl From<CategoryDocuments> for Vec<VehicleDocument> {
    fn from(collection: CategoryDocuments) -> Self {
        collection.entries.into_values().collect()
    }
}

/// Per-vehicle documents, one independent collection per catalog category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSet {
    #[serde(default)]
    pub basic: CategoryDocuments,
    #[serde(default)]
    pub specific: CategoryDocuments,
    #[serde(default)]
    pub additional: CategoryDocuments,
}

impl DocumentSet {
    pub fn for_category(&self, category: DocumentCategory) -> &CategoryDocuments {
        match category {
            DocumentCategory::Basic => &self.basic,
            DocumentCategory::Specific => &self.specific,
            DocumentCategory::Additional => &self.additional,
        }
    }

    fn for_category_mut(&mut self, category: DocumentCategory) -> &mut CategoryDocuments {
        match category {
            DocumentCategory::Basic => &mut self.basic,
            DocumentCategory::Specific => &mut self.specific,
            DocumentCategory::Additional => &mut self.additional,
        }
    }

    /// Insert or replace the document named by `upload`, stamping it as uploaded on `today`.
    pub fn upsert(
        &mut self,
        category: DocumentCategory,
        upload: DocumentUpload,
        today: NaiveDate,
    ) -> Vec<&VehicleDocument> {
        self.for_category_mut(category)
            .insert(upload.into_document(today));
        self.list_for_category(category)
    }

    pub fn get(&self, category: DocumentCategory, name: &str) -> Option<&VehicleDocument> {
        self.for_category(category).get(name)
    }

    pub fn remove(&mut self, category: DocumentCategory, name: &str) -> Option<VehicleDocument> {
        self.for_category_mut(category).remove(name)
    }

    /// Stored documents in catalog display order; names outside the catalog come last.
    pub fn list_for_category(&self, category: DocumentCategory) -> Vec<&VehicleDocument> {
        let mut documents: Vec<&VehicleDocument> = self.for_category(category).iter().collect();
        documents.sort_by_key(|document| {
            category
                .position(&document.name)
                .unwrap_or(usize::MAX)
        });
        documents
    }

    /// Every catalog name for `category` paired with its stored document, if any.
    pub fn catalog_entries(
        &self,
        category: DocumentCategory,
    ) -> Vec<(&'static str, Option<&VehicleDocument>)> {
        let stored = self.for_category(category);
        category
            .document_names()
            .iter()
            .map(|name| (*name, stored.get(name)))
            .collect()
    }

    /// Mandatory basic names with no stored document, in catalog order.
    pub fn missing_mandatory(&self) -> Vec<&'static str> {
        MANDATORY_DOCUMENTS
            .into_iter()
            .filter(|name| !self.basic.contains(name))
            .collect()
    }
}

pub fn validate_mandatory_complete(vehicle: &Vehicle) -> Result<(), MissingDocumentsError> {
    let names = vehicle.documents.missing_mandatory();
    if names.is_empty() {
        Ok(())
    } else {
        Err(MissingDocumentsError { names })
    }
}
