//! Entry entities - individual catalogue items (creatures)

/// Reference to an entry inside a category's member list. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryReference {
    pub name: String,
    pub url: String,
}

impl EntryReference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An item of the full entry index used by search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntrySummary {
    pub name: String,
    pub url: String,
}

impl EntrySummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn as_reference(&self) -> EntryReference {
        EntryReference::new(self.name.clone(), self.url.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ability {
    pub name: String,
}

impl Ability {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Sprite image URLs. Either may be absent for some entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
}

/// Full detail record for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub name: String,
    pub base_experience: u32,
    /// Abilities in remote order; duplicates are possible
    pub abilities: Vec<Ability>,
    /// Type (category) names in slot order
    pub types: Vec<String>,
    pub sprites: Sprites,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
}

impl EntryDetail {
    pub fn new(name: impl Into<String>, base_experience: u32) -> Self {
        Self {
            name: name.into(),
            base_experience,
            abilities: Vec::new(),
            types: Vec::new(),
            sprites: Sprites::default(),
            height: 0,
            weight: 0,
        }
    }

    pub fn with_abilities<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = names.into_iter().map(Ability::new).collect();
        self
    }

    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sprites(mut self, sprites: Sprites) -> Self {
        self.sprites = sprites;
        self
    }

    pub fn with_size(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn ability_names(&self) -> impl Iterator<Item = &str> {
        self.abilities.iter().map(|a| a.name.as_str())
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}
