//! Default catalog of ceremonies and officiants.
//!
//! This module provides the built-in ceremony and officiant data for the system.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding the full dataset on every operation.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with built-in ceremonies and officiants
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let mut ceremonies = Vec::new();
    let mut officiants = Vec::new();

    // ========================================================================
    // Ceremonies
    // ========================================================================

    // Hindu ceremonies
    ceremonies.push(Ceremony {
        id: "hindu-marriage".into(),
        name: "Marriage".into(),
        religion: Religion::Hindu,
        description: "Traditional Hindu wedding ceremony with all rituals".into(),
        image_url: "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=400".into(),
        category: "Wedding".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-griha-pravesh".into(),
        name: "Griha Pravesh".into(),
        religion: Religion::Hindu,
        description: "House warming ceremony for new home".into(),
        image_url: "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=400".into(),
        category: "Home".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-satyanarayan".into(),
        name: "Satyanarayan Puja".into(),
        religion: Religion::Hindu,
        description: "Worship of Lord Vishnu for prosperity".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Puja".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-annaprashan".into(),
        name: "Annaprashan".into(),
        religion: Religion::Hindu,
        description: "First feeding ceremony for babies".into(),
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400".into(),
        category: "Child".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-mundan".into(),
        name: "Mundan".into(),
        religion: Religion::Hindu,
        description: "First haircut ceremony for children".into(),
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400".into(),
        category: "Child".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-shraddha".into(),
        name: "Shraddha".into(),
        religion: Religion::Hindu,
        description: "Ritual for departed souls".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Memorial".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-upanayan".into(),
        name: "Upanayan".into(),
        religion: Religion::Hindu,
        description: "Sacred thread ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-ganesh-puja".into(),
        name: "Ganesh Puja".into(),
        religion: Religion::Hindu,
        description: "Worship of Lord Ganesha".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Puja".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-navratri".into(),
        name: "Navratri Puja".into(),
        religion: Religion::Hindu,
        description: "Nine nights of Goddess worship".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });
    ceremonies.push(Ceremony {
        id: "hindu-diwali".into(),
        name: "Diwali Puja".into(),
        religion: Religion::Hindu,
        description: "Festival of lights celebration".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });

    // Muslim ceremonies
    ceremonies.push(Ceremony {
        id: "muslim-nikkah".into(),
        name: "Nikkah".into(),
        religion: Religion::Muslim,
        description: "Islamic marriage ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=400".into(),
        category: "Wedding".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-aqiqah".into(),
        name: "Aqiqah".into(),
        religion: Religion::Muslim,
        description: "Celebration for newborn child".into(),
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400".into(),
        category: "Child".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-janazah".into(),
        name: "Janazah".into(),
        religion: Religion::Muslim,
        description: "Islamic funeral prayer".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Memorial".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-eid-prayers".into(),
        name: "Eid Prayers".into(),
        religion: Religion::Muslim,
        description: "Special prayers for Eid celebration".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-milad".into(),
        name: "Milad-un-Nabi".into(),
        religion: Religion::Muslim,
        description: "Prophet Muhammad birthday celebration".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-iftar".into(),
        name: "Iftar".into(),
        religion: Religion::Muslim,
        description: "Breaking fast ceremony during Ramadan".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "muslim-dua".into(),
        name: "Dua Ceremonies".into(),
        religion: Religion::Muslim,
        description: "Special prayer ceremonies".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Prayer".into(),
    });

    // Sikh ceremonies
    ceremonies.push(Ceremony {
        id: "sikh-anand-karaj".into(),
        name: "Anand Karaj".into(),
        religion: Religion::Sikh,
        description: "Sikh wedding ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=400".into(),
        category: "Wedding".into(),
    });
    ceremonies.push(Ceremony {
        id: "sikh-naam-karan".into(),
        name: "Naam Karan".into(),
        religion: Religion::Sikh,
        description: "Naming ceremony for newborn".into(),
        image_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=400".into(),
        category: "Child".into(),
    });
    ceremonies.push(Ceremony {
        id: "sikh-amrit-sanchar".into(),
        name: "Amrit Sanchar".into(),
        religion: Religion::Sikh,
        description: "Sikh initiation ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "sikh-akhand-paath".into(),
        name: "Akhand Paath".into(),
        religion: Religion::Sikh,
        description: "Continuous reading of Guru Granth Sahib".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Prayer".into(),
    });
    ceremonies.push(Ceremony {
        id: "sikh-antam-sanskar".into(),
        name: "Antam Sanskar".into(),
        religion: Religion::Sikh,
        description: "Sikh funeral ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Memorial".into(),
    });
    ceremonies.push(Ceremony {
        id: "sikh-gurpurab".into(),
        name: "Gurpurab".into(),
        religion: Religion::Sikh,
        description: "Guru birthday celebration".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });

    // Christian ceremonies
    ceremonies.push(Ceremony {
        id: "christian-baptism".into(),
        name: "Baptism".into(),
        religion: Religion::Christian,
        description: "Christian baptism ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-mass".into(),
        name: "Mass".into(),
        religion: Religion::Christian,
        description: "Holy Mass service".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Service".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-marriage".into(),
        name: "Marriage".into(),
        religion: Religion::Christian,
        description: "Christian wedding ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1606800052052-a08af7148866?w=400".into(),
        category: "Wedding".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-confirmation".into(),
        name: "Confirmation".into(),
        religion: Religion::Christian,
        description: "Christian confirmation ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-funeral".into(),
        name: "Funeral Service".into(),
        religion: Religion::Christian,
        description: "Christian funeral service".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Memorial".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-communion".into(),
        name: "Communion".into(),
        religion: Religion::Christian,
        description: "Holy Communion ceremony".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Ritual".into(),
    });
    ceremonies.push(Ceremony {
        id: "christian-christmas".into(),
        name: "Christmas Service".into(),
        religion: Religion::Christian,
        description: "Christmas celebration service".into(),
        image_url: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400".into(),
        category: "Festival".into(),
    });

    // ========================================================================
    // Officiants
    // ========================================================================

    // Hindu officiants
    officiants.push(Officiant {
        id: "pandit-rajesh-sharma".into(),
        name: "Pandit Rajesh Sharma".into(),
        religion: Religion::Hindu,
        specialties: vec![
            "Marriage".into(),
            "Griha Pravesh".into(),
            "Satyanarayan Puja".into(),
        ],
        languages: vec!["Hindi".into(), "Sanskrit".into(), "English".into()],
        rating: 4.8,
        review_count: 245,
        experience_years: 25,
        fee: 11000,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".into(),
    });
    officiants.push(Officiant {
        id: "pandit-suresh-joshi".into(),
        name: "Pandit Suresh Joshi".into(),
        religion: Religion::Hindu,
        specialties: vec![
            "Ganesh Puja".into(),
            "Navratri Puja".into(),
            "Diwali Puja".into(),
        ],
        languages: vec!["Hindi".into(), "Marathi".into()],
        rating: 4.6,
        review_count: 180,
        experience_years: 18,
        fee: 7500,
        currency: "INR".into(),
        availability: Availability::Offline,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400".into(),
    });
    officiants.push(Officiant {
        id: "pandit-krishna-iyer".into(),
        name: "Pandit Krishna Iyer".into(),
        religion: Religion::Hindu,
        specialties: vec![
            "Upanayan".into(),
            "Annaprashan".into(),
            "Mundan".into(),
            "Shraddha".into(),
        ],
        languages: vec!["Tamil".into(), "Sanskrit".into(), "English".into()],
        rating: 4.9,
        review_count: 320,
        experience_years: 30,
        fee: 15000,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400".into(),
    });
    officiants.push(Officiant {
        id: "pandit-mohan-verma".into(),
        name: "Pandit Mohan Verma".into(),
        religion: Religion::Hindu,
        specialties: vec!["Satyanarayan Puja".into(), "Diwali Puja".into()],
        languages: vec!["Hindi".into()],
        rating: 4.2,
        review_count: 95,
        experience_years: 8,
        fee: 5000,
        currency: "INR".into(),
        availability: Availability::Online,
        verified: false,
        image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400".into(),
    });

    // Muslim officiants
    officiants.push(Officiant {
        id: "maulvi-abdul-rahman".into(),
        name: "Maulvi Abdul Rahman".into(),
        religion: Religion::Muslim,
        specialties: vec!["Nikkah".into(), "Aqiqah".into()],
        languages: vec!["Urdu".into(), "Arabic".into(), "English".into()],
        rating: 4.7,
        review_count: 210,
        experience_years: 22,
        fee: 8000,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=400".into(),
    });
    officiants.push(Officiant {
        id: "maulvi-yusuf-khan".into(),
        name: "Maulvi Yusuf Khan".into(),
        religion: Religion::Muslim,
        specialties: vec!["Janazah".into(), "Dua Ceremonies".into()],
        languages: vec!["Urdu".into(), "Arabic".into()],
        rating: 4.5,
        review_count: 150,
        experience_years: 15,
        fee: 6000,
        currency: "INR".into(),
        availability: Availability::Offline,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".into(),
    });
    officiants.push(Officiant {
        id: "maulvi-imran-siddiqui".into(),
        name: "Maulvi Imran Siddiqui".into(),
        religion: Religion::Muslim,
        specialties: vec!["Eid Prayers".into(), "Milad-un-Nabi".into(), "Iftar".into()],
        languages: vec!["Urdu".into(), "Hindi".into()],
        rating: 4.4,
        review_count: 120,
        experience_years: 12,
        fee: 5500,
        currency: "INR".into(),
        availability: Availability::Online,
        verified: false,
        image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400".into(),
    });

    // Sikh officiants
    officiants.push(Officiant {
        id: "granthi-harpreet-singh".into(),
        name: "Granthi Harpreet Singh".into(),
        religion: Religion::Sikh,
        specialties: vec!["Anand Karaj".into(), "Akhand Paath".into()],
        languages: vec!["Punjabi".into(), "Hindi".into(), "English".into()],
        rating: 4.9,
        review_count: 280,
        experience_years: 27,
        fee: 12000,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400".into(),
    });
    officiants.push(Officiant {
        id: "granthi-gurmeet-kaur".into(),
        name: "Granthi Gurmeet Kaur".into(),
        religion: Religion::Sikh,
        specialties: vec!["Naam Karan".into(), "Gurpurab".into()],
        languages: vec!["Punjabi".into(), "English".into()],
        rating: 4.6,
        review_count: 140,
        experience_years: 14,
        fee: 7000,
        currency: "INR".into(),
        availability: Availability::Offline,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400".into(),
    });
    officiants.push(Officiant {
        id: "granthi-baldev-singh".into(),
        name: "Granthi Baldev Singh".into(),
        religion: Religion::Sikh,
        specialties: vec!["Amrit Sanchar".into(), "Antam Sanskar".into()],
        languages: vec!["Punjabi".into()],
        rating: 4.3,
        review_count: 85,
        experience_years: 10,
        fee: 6500,
        currency: "INR".into(),
        availability: Availability::Offline,
        verified: false,
        image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400".into(),
    });

    // Christian officiants
    officiants.push(Officiant {
        id: "father-thomas-dsouza".into(),
        name: "Father Thomas D'Souza".into(),
        religion: Religion::Christian,
        specialties: vec!["Marriage".into(), "Baptism".into(), "Mass".into()],
        languages: vec!["English".into(), "Konkani".into(), "Hindi".into()],
        rating: 4.8,
        review_count: 260,
        experience_years: 24,
        fee: 9000,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?w=400".into(),
    });
    officiants.push(Officiant {
        id: "father-michael-fernandes".into(),
        name: "Father Michael Fernandes".into(),
        religion: Religion::Christian,
        specialties: vec![
            "Confirmation".into(),
            "Communion".into(),
            "Christmas Service".into(),
        ],
        languages: vec!["English".into(), "Tamil".into()],
        rating: 4.5,
        review_count: 175,
        experience_years: 16,
        fee: 7500,
        currency: "INR".into(),
        availability: Availability::Offline,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400".into(),
    });
    officiants.push(Officiant {
        id: "father-john-mathew".into(),
        name: "Father John Mathew".into(),
        religion: Religion::Christian,
        specialties: vec!["Funeral Service".into(), "Mass".into()],
        languages: vec!["English".into(), "Malayalam".into()],
        rating: 4.7,
        review_count: 130,
        experience_years: 20,
        fee: 8500,
        currency: "INR".into(),
        availability: Availability::Both,
        verified: true,
        image_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400".into(),
    });

    Catalog {
        ceremonies,
        officiants,
    }
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut ceremony_ids = HashSet::new();
        for ceremony in &self.ceremonies {
            if ceremony.id.is_empty() {
                errors.push("Ceremony has empty ID".to_string());
            }
            if !ceremony_ids.insert(ceremony.id.as_str()) {
                errors.push(format!("Duplicate ceremony ID '{}'", ceremony.id));
            }
            if ceremony.name.is_empty() {
                errors.push(format!("Ceremony '{}' has empty name", ceremony.id));
            }
            if ceremony.category.is_empty() {
                errors.push(format!("Ceremony '{}' has empty category", ceremony.id));
            }
        }

        let mut officiant_ids = HashSet::new();
        for officiant in &self.officiants {
            if officiant.id.is_empty() {
                errors.push("Officiant has empty ID".to_string());
            }
            if !officiant_ids.insert(officiant.id.as_str()) {
                errors.push(format!("Duplicate officiant ID '{}'", officiant.id));
            }
            if officiant.name.is_empty() {
                errors.push(format!("Officiant '{}' has empty name", officiant.id));
            }
            if officiant.specialties.is_empty() {
                errors.push(format!("Officiant '{}' has no specialties", officiant.id));
            }
            if officiant.languages.is_empty() {
                errors.push(format!("Officiant '{}' has no languages", officiant.id));
            }
            if !(0.0..=5.0).contains(&officiant.rating) {
                errors.push(format!(
                    "Officiant '{}' has rating {} outside 0-5",
                    officiant.id, officiant.rating
                ));
            }
            if officiant.fee == 0 {
                errors.push(format!("Officiant '{}' has zero fee", officiant.id));
            }
            if officiant.currency.is_empty() {
                errors.push(format!("Officiant '{}' has empty currency", officiant.id));
            }

            // Every specialty must name a ceremony of the same religion,
            // otherwise the officiant can never surface on a ceremony page
            for specialty in &officiant.specialties {
                let resolves = self
                    .ceremonies
                    .iter()
                    .any(|c| c.religion == officiant.religion && &c.name == specialty);
                if !resolves {
                    errors.push(format!(
                        "Officiant '{}' specialty '{}' matches no {} ceremony",
                        officiant.id,
                        specialty,
                        officiant.religion.as_str()
                    ));
                }
            }
        }

        // Check that every religion is represented on both sides
        for religion in Religion::ALL {
            if !self.ceremonies.iter().any(|c| c.religion == religion) {
                errors.push(format!("Catalog has no {} ceremonies", religion.as_str()));
            }
            if !self.officiants.iter().any(|o| o.religion == religion) {
                errors.push(format!("Catalog has no {} officiants", religion.as_str()));
            }
        }

        errors
    }
}
