#![allow(dead_code)]

use rollbook::Roster;
use rollbook::DirectoryConfig;
use serde_json::{Value, json};

/// The Smith household (head John, member Jane) and the Doe household
/// (member Jan, children Amy and Ben)
pub fn smith_and_doe() -> Value {
    json!({
        "lists": {
            "Members": [
                {
                    "id": "h1",
                    "head": {
                        "id": "p1",
                        "first_name": "John",
                        "last_name": "Smith",
                        "birthday": "1980-03-04",
                        "address1": "1 Main St",
                        "city": "Springfield",
                        "state": "IL",
                        "postal_code": "62701-1234",
                        "cell_phone": 2175550100u64,
                        "home_phone": 2175550101u64,
                        "email": "john@example.com"
                    },
                    "members": [
                        { "id": "p2", "first_name": "Jane", "last_name": "Smith", "email": "jane@example.com" }
                    ]
                },
                {
                    "id": "h2",
                    "members": [
                        { "id": "p3", "first_name": "Jan", "last_name": "Doe", "pending_baptism": true }
                    ],
                    "children": {
                        "c1": { "id": "c1", "first_name": "Amy", "last_name": "Doe", "birthday": "2022-06-01" },
                        "c2": { "id": "c2", "first_name": "Ben", "last_name": "Doe", "birthday": "2024-03-10" }
                    }
                }
            ]
        }
    })
}

pub fn roster(value: Value) -> Roster {
    serde_json::from_value(value).expect("valid roster fixture")
}

/// A configuration shaped like the saved settings: numbers as strings,
/// section kinds implied by position where possible
pub fn scenario_config() -> Value {
    json!({
        "page_size": "Letter",
        "top_margin": "6",
        "left_margin": "4",
        "bottom_margin": "6",
        "right_margin": "4",
        "number_of_columns": "3",
        "padding": "8",
        "gutter": "4",
        "image_padding": "4",
        "column_height": "22",
        "font_size": "7",
        "font_family": "Arial",
        "line_height": "3",
        "highlight_opacity": "0.06",
        "sections": [
            {
                "show": true,
                "header": "Membership Directory",
                "list_name": "Members",
                "address": true,
                "city": true,
                "state": true,
                "postal_code": true,
                "email": true,
                "phones": true,
                "phone_count": "1",
                "birthday": true,
                "baptism_footnote": true
            },
            {
                "show": true,
                "kind": "children",
                "header": "Children",
                "age": true,
                "birthday": true,
                "line_spacing": "1"
            },
            {
                "show": true,
                "kind": "index",
                "header": "Membership by First Name",
                "columns": "4"
            }
        ]
    })
}

pub fn config(value: Value) -> DirectoryConfig {
    serde_json::from_value(value).expect("valid config fixture")
}

/// `count` one-person households
pub fn many_households(count: usize) -> Value {
    let households: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("h{}", i),
                "head": {
                    "id": format!("p{}", i),
                    "first_name": "Pat",
                    "last_name": format!("Person{:03}", i)
                }
            })
        })
        .collect();
    json!({ "lists": { "Members": households } })
}
