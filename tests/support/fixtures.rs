use adsync::{Ad, AdFields, AdOwner, AdPage, Pagination};
use chrono::Utc;

pub fn ad(id: &str, title: &str) -> Ad {
    Ad {
        id: id.to_string(),
        title: title.to_string(),
        description: "A description comfortably over twenty characters.".to_string(),
        price: 150.0,
        location: "Poznan".to_string(),
        category: Some("home".to_string()),
        photos: vec![format!("{}-photo", id)],
        owner: AdOwner {
            id: "u1".to_string(),
            name: "Marta".to_string(),
            avatar_url: None,
        },
        active: true,
        created_at: Utc::now(),
    }
}

pub fn page(ads: Vec<Ad>) -> AdPage {
    let total = ads.len() as u64;
    AdPage {
        ads,
        pagination: Pagination {
            current: 1,
            pages: 1,
            total,
        },
    }
}

pub fn page_with_total(ads: Vec<Ad>, total: u64) -> AdPage {
    AdPage {
        ads,
        pagination: Pagination {
            current: 1,
            pages: 3,
            total,
        },
    }
}

pub fn fields(title: &str) -> AdFields {
    AdFields {
        title: title.to_string(),
        description: "A description comfortably over twenty characters.".to_string(),
        price: 99.0,
        location: "Poznan".to_string(),
        category: "home".to_string(),
        photos: Vec::new(),
    }
}
