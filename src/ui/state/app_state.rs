use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::property::{sample_properties, Property};

pub struct AppState {
    pub properties: Signal<Vec<Property>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            properties: use_signal(sample_properties),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
