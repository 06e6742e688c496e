//! Response shapes of the three catalogue endpoints (plus the entry index)
//!
//! - `GET /type` and `GET /pokemon?limit=N` → [`NamedResourceList`]
//! - `GET /type/{name}` → [`CategoryResponse`]
//! - `GET /pokemon/{id}` → [`EntryResponse`]
//!
//! The category endpoint nests each entry link one level deeper
//! (`pokemon[].pokemon.url`) than the list endpoint (`results[].url`). That is
//! the remote shape, so the two are kept as separate types.

use serde::{Deserialize, Serialize};

use pokedex_domain::{
    Ability, Category, CategoryMembers, EntryDetail, EntryReference, EntrySummary, Sprites,
};

// =============================================================================
// List endpoints
// =============================================================================

/// `{ name, url }` item of a list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Paginated list body. Only `results` is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceList {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl NamedResourceList {
    /// Narrow a `/type` listing into categories, preserving order.
    pub fn into_categories(self) -> Vec<Category> {
        self.results
            .into_iter()
            .map(|r| Category::new(r.name, r.url))
            .collect()
    }

    /// Narrow a `/pokemon` listing into search index items, preserving order.
    pub fn into_summaries(self) -> Vec<EntrySummary> {
        self.results
            .into_iter()
            .map(|r| EntrySummary::new(r.name, r.url))
            .collect()
    }
}

// =============================================================================
// Category detail endpoint
// =============================================================================

/// Inner link of a category member slot (`pokemon.pokemon`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLink {
    pub name: String,
    pub url: String,
}

/// One element of a category's `pokemon` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntrySlot {
    pub pokemon: EntryLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon: Vec<CategoryEntrySlot>,
}

impl CategoryResponse {
    /// Narrow into the member list of `category`, preserving remote order.
    pub fn into_members(self, category: Category) -> CategoryMembers {
        let entries = self
            .pokemon
            .into_iter()
            .map(|slot| EntryReference::new(slot.pokemon.name, slot.pokemon.url))
            .collect();
        CategoryMembers::new(category, entries)
    }
}

// =============================================================================
// Entry detail endpoint
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: AbilityName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: TypeName,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesPayload {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryResponse {
    pub name: String,
    /// `null` for some entries (e.g. newer forms)
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: SpritesPayload,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
}

impl From<EntryResponse> for EntryDetail {
    /// Missing base experience counts as 0.
    fn from(response: EntryResponse) -> Self {
        EntryDetail {
            name: response.name,
            base_experience: response.base_experience.unwrap_or(0),
            abilities: response
                .abilities
                .into_iter()
                .map(|slot| Ability::new(slot.ability.name))
                .collect(),
            types: response
                .types
                .into_iter()
                .map(|slot| slot.type_ref.name)
                .collect(),
            sprites: Sprites {
                front_default: response.sprites.front_default,
                back_default: response.sprites.back_default,
            },
            height: response.height,
            weight: response.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_list_narrows_in_order() {
        let body = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"},
                {"name": "fighting", "url": "https://pokeapi.co/api/v2/type/2/"}
            ]
        }"#;
        let list: NamedResourceList = serde_json::from_str(body).unwrap();
        let categories = list.into_categories();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "normal");
        assert_eq!(categories[1].url, "https://pokeapi.co/api/v2/type/2/");
    }

    #[test]
    fn category_members_read_the_nested_link() {
        let body = r#"{
            "name": "grass",
            "damage_relations": {},
            "pokemon": [
                {"pokemon": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}, "slot": 1},
                {"pokemon": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}, "slot": 1}
            ]
        }"#;
        let response: CategoryResponse = serde_json::from_str(body).unwrap();
        let members =
            response.into_members(Category::new("grass", "https://pokeapi.co/api/v2/type/12/"));

        assert_eq!(members.category.name, "grass");
        assert_eq!(members.entries[0].name, "bulbasaur");
        assert_eq!(members.entries[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
    }

    #[test]
    fn list_shape_is_not_accepted_as_category_shape() {
        // `results[].url` must not silently satisfy `pokemon[].pokemon.url`
        let body = r#"{"pokemon": [{"name": "bulbasaur", "url": "x"}]}"#;
        assert!(serde_json::from_str::<CategoryResponse>(body).is_err());
    }

    #[test]
    fn entry_detail_narrows_all_fields() {
        let body = r#"{
            "id": 1,
            "name": "bulbasaur",
            "base_experience": 64,
            "height": 7,
            "weight": 69,
            "abilities": [
                {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
            ],
            "sprites": {"front_default": "front.png", "back_default": "back.png", "other": {}},
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ]
        }"#;
        let detail: EntryDetail = serde_json::from_str::<EntryResponse>(body).unwrap().into();

        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(detail.base_experience, 64);
        assert_eq!(
            detail.ability_names().collect::<Vec<_>>(),
            vec!["overgrow", "chlorophyll"]
        );
        assert_eq!(detail.types, vec!["grass", "poison"]);
        assert_eq!(detail.sprites.back_default.as_deref(), Some("back.png"));
        assert_eq!((detail.height, detail.weight), (7, 69));
    }

    #[test]
    fn null_base_experience_counts_as_zero() {
        let body = r#"{"name": "pikachu-cosplay", "base_experience": null, "abilities": [], "sprites": {"front_default": null}, "types": []}"#;
        let detail: EntryDetail = serde_json::from_str::<EntryResponse>(body).unwrap().into();
        assert_eq!(detail.base_experience, 0);
        assert!(detail.sprites.front_default.is_none());
    }
}
