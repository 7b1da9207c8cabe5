use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const BASIC_DOCUMENTS: [&str; 5] = [
    "Permiso de Circulación",
    "Ficha Técnica",
    "Póliza",
    "Recibo de Seguro",
    "ITV Favorable",
];

pub const SPECIFIC_DOCUMENTS: [&str; 5] = [
    "Memoria",
    "Administrador Poder Sume",
    "Certificado Carrocero",
    "Contrato de Alquiler",
    "Anexo Contrato de Alquiler",
];

pub const ADDITIONAL_DOCUMENTS: [&str; 5] = ["Varios1", "Varios2", "Varios3", "Varios4", "Varios5"];

/// Basic documents a vehicle must hold before it can be saved.
pub const MANDATORY_DOCUMENTS: [&str; 4] = [
    "Permiso de Circulación",
    "Ficha Técnica",
    "Póliza",
    "Recibo de Seguro",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Basic,
    Specific,
    Additional,
}

impl DocumentCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Basic, Self::Specific, Self::Additional]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Documentación Básica",
            Self::Specific => "Documentación Específica",
            Self::Additional => "Documentación Adicional",
        }
    }

    /// Catalog names in display order.
    pub const fn document_names(self) -> &'static [&'static str] {
        match self {
            Self::Basic => &BASIC_DOCUMENTS,
            Self::Specific => &SPECIFIC_DOCUMENTS,
            Self::Additional => &ADDITIONAL_DOCUMENTS,
        }
    }

    pub fn position(self, name: &str) -> Option<usize> {
        self.document_names()
            .iter()
            .position(|candidate| *candidate == name)
    }

    pub fn contains(self, name: &str) -> bool {
        self.position(name).is_some()
    }
}

pub fn categories_and_names() -> Vec<(DocumentCategory, &'static [&'static str])> {
    DocumentCategory::ordered()
        .into_iter()
        .map(|category| (category, category.document_names()))
        .collect()
}

pub fn mandatory_names() -> BTreeSet<&'static str> {
    MANDATORY_DOCUMENTS.into_iter().collect()
}

/// Grouping used by the vehicle edit form.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFormGroup {
    pub title: &'static str,
    pub category: DocumentCategory,
    pub names: &'static [&'static str],
    pub mandatory: bool,
}

pub fn form_groups() -> [DocumentFormGroup; 4] {
    [
        DocumentFormGroup {
            title: "Documentación Legal",
            category: DocumentCategory::Basic,
            names: &MANDATORY_DOCUMENTS,
            mandatory: true,
        },
        DocumentFormGroup {
            title: "Mantenimiento",
            category: DocumentCategory::Basic,
            names: &BASIC_DOCUMENTS[4..],
            mandatory: false,
        },
        DocumentFormGroup {
            title: "Documentación Específica",
            category: DocumentCategory::Specific,
            names: &SPECIFIC_DOCUMENTS,
            mandatory: false,
        },
        DocumentFormGroup {
            title: "Documentación Adicional",
            category: DocumentCategory::Additional,
            names: &ADDITIONAL_DOCUMENTS,
            mandatory: false,
        },
    ]
}
