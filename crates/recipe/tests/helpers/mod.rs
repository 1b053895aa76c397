#![allow(dead_code)]

use pantry_recipe::{Corpus, MatchResult, PrepareOptions};
use serde_json::{Value, json};

pub fn corpus(document: Value) -> Corpus {
    let records = pantry_recipe::records_from_document(document);
    Corpus::prepare(&records, &PrepareOptions::default())
}

pub fn names(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

pub fn kitchen_json() -> Value {
    json!([
        {
            "id": 1,
            "title": "Omelett",
            "time": 10,
            "tags": ["frukost", "snabb"],
            "ingredients": [{ "name": "Ägg" }, { "name": "Mjölk" }, { "name": "Smör" }],
            "Instructions": ["Vispa ägg och mjölk.", "Stek i smör."]
        },
        {
            "id": 2,
            "title": "Pannkakor",
            "time": 30,
            "tags": ["klassiker"],
            "ingredients": [
                { "name": "Vetemjöl" },
                { "name": "Mjölk" },
                { "name": "Ägg" },
                { "name": "Salt" },
                { "name": "Smör" },
                { "name": "Salt" }
            ],
            "instructions": "Vispa ihop smeten och stek tunna pannkakor."
        },
        {
            "id": 3,
            "title": "Kokt potatis",
            "time": 25,
            "ingredients": [{ "name": "Potatis" }, { "name": "Salt" }]
        },
        {
            "id": 4,
            "title": "Tom tallrik",
            "ingredients": []
        },
        {
            "id": 5,
            "title": "Pasta med ost",
            "ingredients": [{ "name": "Pasta" }, { "name": " ost " }, { "name": "" }]
        }
    ])
}

pub fn kitchen() -> Corpus {
    corpus(kitchen_json())
}
