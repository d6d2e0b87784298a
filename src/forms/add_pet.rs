//! Add-pet form controller (NGO listing screen)
//!
//! Age is held as the raw text the user typed and only parsed during
//! validation, so the controller can report "not a number" instead of
//! silently coercing. The photo is checked against the backend's content
//! type whitelist and size ceiling before any bytes leave the machine.

use std::time::Duration;

use super::{FieldErrors, FormPhase, Navigation};
use crate::api::{ImageUpload, PetApi, ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES};
use paws_types::{NewPet, Pet, Species};

/// How long the success indicator stays up before navigating home.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Outcome of a successful submit: the created listing plus where to go
/// and how long to show the success indicator first.
#[derive(Debug, Clone, PartialEq)]
pub struct PetSubmission {
    pub pet: Pet,
    pub navigation: Navigation,
    pub redirect_after: Duration,
}

#[derive(Debug)]
pub struct AddPetForm {
    name: String,
    species: Species,
    age: String,
    location: String,
    image: Option<ImageUpload>,
    vaccinated: bool,
    neutered: bool,
    medical_notes: String,
    errors: FieldErrors,
    submit_error: Option<String>,
    phase: FormPhase,
    created: Option<Pet>,
}

impl Default for AddPetForm {
    fn default() -> Self {
        // Same starting point as the screen: dog selected, health flags on.
        Self {
            name: String::new(),
            species: Species::Dog,
            age: String::new(),
            location: String::new(),
            image: None,
            vaccinated: true,
            neutered: true,
            medical_notes: String::new(),
            errors: FieldErrors::default(),
            submit_error: None,
            phase: FormPhase::Idle,
            created: None,
        }
    }
}

impl AddPetForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ── read side ──────────────────────────────────────────────

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// The listing the server created, once a submit has succeeded.
    pub fn created(&self) -> Option<&Pet> {
        self.created.as_ref()
    }

    // ── edits ──────────────────────────────────────────────────

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.edited("name");
    }

    pub fn set_species(&mut self, species: Species) {
        self.species = species;
        self.edited("species");
    }

    pub fn set_age(&mut self, value: impl Into<String>) {
        self.age = value.into();
        self.edited("age");
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
        self.edited("location");
    }

    pub fn attach_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
        self.edited("image");
    }

    pub fn remove_image(&mut self) {
        self.image = None;
        self.edited("image");
    }

    pub fn set_vaccinated(&mut self, value: bool) {
        self.vaccinated = value;
        self.edited("vaccinated");
    }

    pub fn set_neutered(&mut self, value: bool) {
        self.neutered = value;
        self.edited("neutered");
    }

    pub fn set_medical_notes(&mut self, value: impl Into<String>) {
        self.medical_notes = value.into();
        self.edited("medical_notes");
    }

    fn edited(&mut self, field: &'static str) {
        self.errors.clear_field(field);
        self.submit_error = None;
        self.phase = FormPhase::Idle;
    }

    // ── submit ─────────────────────────────────────────────────

    /// Validate, then publish the listing. On success the result says to
    /// show the success indicator for [`SUCCESS_REDIRECT_DELAY`] and then
    /// go home; on failure the details are readable off the form.
    pub async fn submit(&mut self, api: &dyn PetApi) -> Option<PetSubmission> {
        self.phase = FormPhase::Validating;
        let Some((fields, image)) = self.validated_payload() else {
            self.phase = FormPhase::Failed;
            return None;
        };

        self.submit_error = None;
        self.phase = FormPhase::Submitting;

        match api.create_pet(fields, image).await {
            Ok(pet) => {
                self.phase = FormPhase::Success;
                self.created = Some(pet.clone());
                Some(PetSubmission {
                    pet,
                    navigation: Navigation::Home,
                    redirect_after: SUCCESS_REDIRECT_DELAY,
                })
            }
            Err(e) => {
                self.submit_error = Some(e.message().to_string());
                self.phase = FormPhase::Failed;
                None
            }
        }
    }

    /// Run every client-side check and, when all pass, assemble the wire
    /// payload. The error map is rebuilt from scratch each pass.
    fn validated_payload(&mut self) -> Option<(NewPet, ImageUpload)> {
        let mut errors = FieldErrors::default();

        if self.name.is_empty() {
            errors.insert("name", "Pet name is required");
        }

        let age = if self.age.is_empty() {
            errors.insert("age", "Age is required");
            None
        } else {
            match self.age.trim().parse::<u32>() {
                Ok(age) => Some(age),
                Err(_) => {
                    errors.insert("age", "Age must be a non-negative whole number");
                    None
                }
            }
        };

        if self.location.is_empty() {
            errors.insert("location", "Location is required");
        }

        match &self.image {
            None => {
                errors.insert("image", "A photo is required");
            }
            Some(image) => {
                if !ALLOWED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
                    errors.insert(
                        "image",
                        format!(
                            "Invalid file type. Allowed types: {}",
                            ALLOWED_IMAGE_TYPES.join(", ")
                        ),
                    );
                } else if image.bytes.len() > MAX_IMAGE_BYTES {
                    errors.insert("image", "File size exceeds 10MB limit");
                }
            }
        }

        let ok = errors.is_empty();
        self.errors = errors;
        if !ok {
            return None;
        }

        let fields = NewPet {
            name: self.name.clone(),
            species: self.species,
            age: age?,
            location: self.location.clone(),
            vaccinated: self.vaccinated,
            neutered: self.neutered,
            medical_notes: if self.medical_notes.is_empty() {
                None
            } else {
                Some(self.medical_notes.clone())
            },
        };
        Some((fields, self.image.clone()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{pet, png_upload, StubApi};
    use crate::error::ApiError;

    fn valid_form() -> AddPetForm {
        let mut form = AddPetForm::new();
        form.set_name("Rex");
        form.set_age("3");
        form.set_location("Lisboa");
        form.attach_image(png_upload());
        form
    }

    // ── required fields ──────────────────────────────────────────

    #[tokio::test]
    async fn blank_form_reports_every_required_field() {
        let mut form = AddPetForm::new();
        assert!(form.submit(&StubApi::new()).await.is_none());

        assert_eq!(form.errors().get("name"), Some("Pet name is required"));
        assert_eq!(form.errors().get("age"), Some("Age is required"));
        assert_eq!(form.errors().get("location"), Some("Location is required"));
        assert_eq!(form.errors().get("image"), Some("A photo is required"));
        assert_eq!(form.phase(), FormPhase::Failed);
    }

    #[tokio::test]
    async fn age_must_be_a_non_negative_integer() {
        for bad in ["three", "-1", "2.5", "3 years"] {
            let mut form = valid_form();
            form.set_age(bad);
            assert!(form.submit(&StubApi::new()).await.is_none(), "{bad}");
            assert_eq!(
                form.errors().get("age"),
                Some("Age must be a non-negative whole number"),
                "{bad}"
            );
        }
    }

    #[tokio::test]
    async fn zero_age_is_valid() {
        let api = StubApi::with_created(Ok(pet("p-1", 0)));
        let mut form = valid_form();
        form.set_age("0");
        assert!(form.submit(&api).await.is_some());
    }

    // ── image checks ─────────────────────────────────────────────

    #[tokio::test]
    async fn disallowed_content_type_is_rejected_before_any_call() {
        let mut form = valid_form();
        form.attach_image(ImageUpload {
            file_name: "rex.gif".into(),
            content_type: "image/gif".into(),
            bytes: vec![0u8; 16],
        });

        assert!(form.submit(&StubApi::new()).await.is_none());
        assert_eq!(
            form.errors().get("image"),
            Some("Invalid file type. Allowed types: image/jpeg, image/jpg, image/png, image/webp")
        );
    }

    #[tokio::test]
    async fn oversized_image_is_rejected_before_any_call() {
        let mut form = valid_form();
        form.attach_image(ImageUpload {
            file_name: "rex.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0u8; MAX_IMAGE_BYTES + 1],
        });

        assert!(form.submit(&StubApi::new()).await.is_none());
        assert_eq!(
            form.errors().get("image"),
            Some("File size exceeds 10MB limit")
        );
    }

    #[tokio::test]
    async fn image_exactly_at_the_cap_passes() {
        let api = StubApi::with_created(Ok(pet("p-1", 3)));
        let mut form = valid_form();
        form.attach_image(ImageUpload {
            file_name: "rex.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0u8; MAX_IMAGE_BYTES],
        });
        assert!(form.submit(&api).await.is_some());
    }

    // ── payload assembly ─────────────────────────────────────────

    #[tokio::test]
    async fn empty_medical_notes_are_omitted() {
        let api = StubApi::with_created(Ok(pet("p-1", 3)));
        let mut form = valid_form();
        form.submit(&api).await.unwrap();

        let sent = api.last_new_pet.lock().unwrap().clone().unwrap();
        assert_eq!(sent.medical_notes, None);
        assert_eq!(sent.name, "Rex");
        assert_eq!(sent.age, 3);
        assert!(sent.vaccinated);
        assert!(sent.neutered);
    }

    #[tokio::test]
    async fn medical_notes_travel_when_present() {
        let api = StubApi::with_created(Ok(pet("p-1", 3)));
        let mut form = valid_form();
        form.set_medical_notes("FIV negative");
        form.set_vaccinated(false);
        form.submit(&api).await.unwrap();

        let sent = api.last_new_pet.lock().unwrap().clone().unwrap();
        assert_eq!(sent.medical_notes.as_deref(), Some("FIV negative"));
        assert!(!sent.vaccinated);
    }

    // ── outcome handling ─────────────────────────────────────────

    #[tokio::test]
    async fn success_navigates_home_after_the_display_delay() {
        let api = StubApi::with_created(Ok(pet("p-1", 3)));
        let mut form = valid_form();

        let submission = form.submit(&api).await.unwrap();
        assert_eq!(submission.navigation, Navigation::Home);
        assert_eq!(submission.redirect_after, SUCCESS_REDIRECT_DELAY);
        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(form.created().unwrap().id, "p-1");
    }

    #[tokio::test]
    async fn non_ngo_rejection_surfaces_server_message() {
        let api = StubApi::with_created(Err(ApiError::Authorization(
            "Only NGOs can add pets".into(),
        )));
        let mut form = valid_form();

        assert!(form.submit(&api).await.is_none());
        assert_eq!(form.submit_error(), Some("Only NGOs can add pets"));
        assert_eq!(form.phase(), FormPhase::Failed);
        assert!(form.created().is_none());
    }

    #[tokio::test]
    async fn field_edit_after_failure_returns_to_idle() {
        let mut form = AddPetForm::new();
        assert!(form.submit(&StubApi::new()).await.is_none());
        assert_eq!(form.phase(), FormPhase::Failed);

        form.set_name("Rex");
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.errors().get("name").is_none());
        assert_eq!(form.errors().get("age"), Some("Age is required"));
    }
}
