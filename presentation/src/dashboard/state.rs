//! Dashboard state and key handling
//!
//! Plain data, no terminal access, so every interaction can be driven
//! from tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pricing_application::PipelineContext;
use pricing_domain::{LocationCatalog, ModelKey, OTHER_LOCATION, PriceSource, RawFeatureInput};

pub const SQFT_MIN: u32 = 300;
pub const SQFT_MAX: u32 = 30_000;
pub const SQFT_STEP: u32 = 50;
pub const SQFT_DEFAULT: u32 = 1200;
pub const ROOMS_MIN: u32 = 1;
pub const ROOMS_MAX: u32 = 10;
pub const BHK_DEFAULT: u32 = 3;
pub const BATH_DEFAULT: u32 = 2;

/// Locations skipped by PageUp/PageDown
const LOCATION_PAGE: usize = 10;

/// Input fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TotalSqft,
    Bhk,
    Bath,
    Location,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::TotalSqft, Field::Bhk, Field::Bath, Field::Location];

    pub fn label(&self) -> &'static str {
        match self {
            Field::TotalSqft => "Total Square Feet",
            Field::Bhk => "BHK (Bedrooms)",
            Field::Bath => "Bathrooms",
            Field::Location => "Location",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::TotalSqft => Field::Bhk,
            Field::Bhk => Field::Bath,
            Field::Bath => Field::Location,
            Field::Location => Field::TotalSqft,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::TotalSqft => Field::Location,
            Field::Bhk => Field::TotalSqft,
            Field::Bath => Field::Bhk,
            Field::Location => Field::Bath,
        }
    }
}

/// What the last prediction produced
#[derive(Debug, Clone, PartialEq)]
pub enum Estimate {
    /// A usable price in lakhs
    Price { price: f64, source: PriceSource },
    /// Non-positive price; shown with a warning
    Unusual { price: f64 },
    /// Input rejected by validation
    Error(String),
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub sqft: u32,
    pub bhk: u32,
    pub bath: u32,
    locations: Vec<String>,
    location_index: usize,
    pub focus: Field,
    pub estimate: Option<Estimate>,
    pub should_quit: bool,
}

impl DashboardState {
    pub fn new(catalog: &LocationCatalog) -> Self {
        Self {
            sqft: SQFT_DEFAULT,
            bhk: BHK_DEFAULT,
            bath: BATH_DEFAULT,
            locations: catalog.as_slice().to_vec(),
            location_index: 0,
            focus: Field::TotalSqft,
            estimate: None,
            should_quit: false,
        }
    }

    /// Currently selected location
    pub fn location(&self) -> &str {
        self.locations
            .get(self.location_index)
            .map(String::as_str)
            .unwrap_or(OTHER_LOCATION)
    }

    /// 1-based position of the selected location and the catalog size
    pub fn location_position(&self) -> (usize, usize) {
        (self.location_index + 1, self.locations.len().max(1))
    }

    pub fn features(&self) -> RawFeatureInput {
        RawFeatureInput::new(f64::from(self.sqft), self.bath, self.bhk, self.location())
    }

    /// Run the pipeline for the current inputs
    pub fn predict(&mut self, context: &PipelineContext) {
        let estimate = match context.predict(self.features(), Some(ModelKey::default_selection())) {
            Ok(outcome) => match outcome.predictions.first() {
                Some(p) if p.price > 0.0 => Estimate::Price {
                    price: p.price,
                    source: p.source,
                },
                Some(p) => Estimate::Unusual { price: p.price },
                None => Estimate::Error("no prediction produced".to_string()),
            },
            Err(e) => Estimate::Error(e.to_string()),
        };
        self.estimate = Some(estimate);
    }

    pub fn handle_key(&mut self, key: KeyEvent, context: &PipelineContext) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Enter => self.predict(context),
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => self.focus = self.focus.prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => self.adjust(1),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => self.adjust(-1),
            KeyCode::PageDown => self.adjust(LOCATION_PAGE as i64),
            KeyCode::PageUp => self.adjust(-(LOCATION_PAGE as i64)),
            _ => {}
        }
    }

    /// Move the focused field by `steps`, clamped to its range
    fn adjust(&mut self, steps: i64) {
        match self.focus {
            Field::TotalSqft => {
                self.sqft = step_clamped(self.sqft, steps * i64::from(SQFT_STEP), SQFT_MIN, SQFT_MAX)
            }
            Field::Bhk => self.bhk = step_clamped(self.bhk, steps, ROOMS_MIN, ROOMS_MAX),
            Field::Bath => self.bath = step_clamped(self.bath, steps, ROOMS_MIN, ROOMS_MAX),
            Field::Location => {
                let last = self.locations.len().saturating_sub(1) as i64;
                self.location_index = (self.location_index as i64 + steps).clamp(0, last) as usize;
            }
        }
    }
}

fn step_clamped(value: u32, delta: i64, min: u32, max: u32) -> u32 {
    (i64::from(value) + delta).clamp(i64::from(min), i64::from(max)) as u32
}
