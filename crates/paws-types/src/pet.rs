//! Pet listing types
//!
//! The server speaks two spellings for the same record: the list endpoint
//! returns raw documents keyed by `_id`, the create endpoint returns `id`.
//! `Pet` accepts both and always serializes as `id`. Timestamps arrive as
//! naive ISO-8601 (no timezone suffix), so they are modeled as
//! [`chrono::NaiveDateTime`] rather than `DateTime<Utc>`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species tag. The wire value doubles as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            other => Err(format!("unknown species '{other}' (expected Dog or Cat)")),
        }
    }
}

/// An adoptable pet as the server returns it.
///
/// `ngo_name` and `ngo_email` are only populated by the detail endpoint,
/// which joins the owning account into the document. List payloads omit
/// them, hence the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(alias = "_id")]
    pub id: String,
    pub ngo_user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub age: u32,
    pub location: String,
    pub image_url: String,
    pub vaccinated: bool,
    pub neutered: bool,
    #[serde(default)]
    pub medical_notes: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngo_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngo_email: Option<String>,
}

/// Fields for a new listing. The photo itself travels as a separate
/// multipart file part, never inside this struct; the server stores it
/// and assigns the resulting `image_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub age: u32,
    pub location: String,
    pub vaccinated: bool,
    pub neutered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_notes: Option<String>,
}

/// One page of listings plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetPage {
    pub pets: Vec<Pet>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_doc() -> &'static str {
        r#"{
            "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
            "ngo_user_id": "u-ngo-1",
            "name": "Rex",
            "type": "Dog",
            "age": 3,
            "location": "Lisboa",
            "image_url": "https://img.example/rex.jpg",
            "vaccinated": true,
            "neutered": false,
            "medical_notes": null,
            "created_at": "2026-08-25T10:30:00.123456"
        }"#
    }

    #[test]
    fn pet_parses_list_shape_with_underscore_id() {
        let pet: Pet = serde_json::from_str(list_doc()).unwrap();
        assert_eq!(pet.id, "66f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.age, 3);
        assert!(pet.medical_notes.is_none());
        assert!(pet.ngo_name.is_none());
    }

    #[test]
    fn pet_parses_create_shape_with_plain_id() {
        let json = r#"{
            "id": "66f1a2b3c4d5e6f7a8b9c0d2",
            "ngo_user_id": "u-ngo-1",
            "name": "Mia",
            "type": "Cat",
            "age": 1,
            "location": "Porto",
            "image_url": "https://img.example/mia.png",
            "vaccinated": true,
            "neutered": true,
            "medical_notes": "FIV negative",
            "created_at": "2026-08-25T10:30:00"
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.id, "66f1a2b3c4d5e6f7a8b9c0d2");
        assert_eq!(pet.medical_notes.as_deref(), Some("FIV negative"));
    }

    #[test]
    fn pet_detail_carries_owner_contact() {
        let mut value: serde_json::Value = serde_json::from_str(list_doc()).unwrap();
        value["ngo_name"] = "Paws Shelter".into();
        value["ngo_email"] = "shelter@paws.org".into();
        let pet: Pet = serde_json::from_value(value).unwrap();
        assert_eq!(pet.ngo_name.as_deref(), Some("Paws Shelter"));
        assert_eq!(pet.ngo_email.as_deref(), Some("shelter@paws.org"));
    }

    #[test]
    fn naive_timestamp_without_fraction_parses() {
        let pet: Pet = serde_json::from_str(
            &list_doc().replace("2026-08-25T10:30:00.123456", "2026-08-25T10:30:00"),
        )
        .unwrap();
        assert_eq!(
            pet.created_at,
            NaiveDateTime::parse_from_str("2026-08-25T10:30:00", "%Y-%m-%dT%H:%M:%S").unwrap()
        );
    }

    #[test]
    fn new_pet_serializes_type_and_skips_empty_notes() {
        let new_pet = NewPet {
            name: "Rex".into(),
            species: Species::Dog,
            age: 3,
            location: "Lisboa".into(),
            vaccinated: true,
            neutered: false,
            medical_notes: None,
        };
        let value = serde_json::to_value(&new_pet).unwrap();
        assert_eq!(value["type"], "Dog");
        assert!(value.get("medical_notes").is_none());
    }

    #[test]
    fn species_parse_is_case_insensitive() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("CAT".parse::<Species>().unwrap(), Species::Cat);
        assert!("hamster".parse::<Species>().is_err());
    }

    #[test]
    fn pet_page_parses_pagination_metadata() {
        let json = format!(
            r#"{{"pets":[{}],"total":41,"page":3,"limit":20}}"#,
            list_doc()
        );
        let page: PetPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page.pets.len(), 1);
        assert_eq!(page.total, 41);
        assert_eq!(page.page, 3);
        assert_eq!(page.limit, 20);
    }
}
