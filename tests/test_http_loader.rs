use recipe_catalog::{load_from, CatalogError};

const SOUP: &str = r#"
{
    "id": "tomato-soup",
    "title": "Tomato Soup",
    "tags": ["vegan", "quick"],
    "ingredients": [
        {"name": "Tomatoes", "amount_g": 800, "amount_oz": 28.2},
        {"name": "Salt"}
    ],
    "steps": ["Simmer the tomatoes.", "Blend."],
    "yield_servings": 4,
    "total_time_min": 25,
    "created_at": "2024-01-10",
    "last_updated_at": "2024-01-10",
    "modular": false
}
"#;

const BOWL: &str = r#"
{
    "id": "grain-bowl",
    "title": "Grain Bowl",
    "tags": ["lunch"],
    "ingredients": [],
    "steps": [],
    "created_at": "2024-02-01",
    "last_updated_at": "2024-02-03",
    "modular": true,
    "components": {
        "base": {
            "label": "Base",
            "required": true,
            "multiple": false,
            "options": [
                {"id": "rice", "name": "Rice", "time_min": 20, "ingredients": [], "steps": ["Cook rice."]}
            ]
        }
    },
    "assembly": {"ingredients": [], "steps": ["Fill the bowl."]}
}
"#;

#[tokio::test]
async fn test_loads_index_and_every_recipe() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/recipes/index.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["tomato-soup.json", "grain-bowl.json"]"#)
        .create();
    let _soup = server
        .mock("GET", "/recipes/tomato-soup.json")
        .with_status(200)
        .with_body(SOUP)
        .create();
    let _bowl = server
        .mock("GET", "/recipes/grain-bowl.json")
        .with_status(200)
        .with_body(BOWL)
        .create();

    let catalog = load_from(&server.url()).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.recipes()[0].id, "tomato-soup");
    assert_eq!(catalog.recipes()[1].id, "grain-bowl");
    assert_eq!(catalog.all_tags(), vec!["lunch", "quick", "vegan"]);

    let soup = catalog.find("tomato-soup").unwrap();
    assert_eq!(soup.ingredients[0].amount_g, Some(800.0));
    assert_eq!(soup.ingredients[1].amount_g, None);
    assert!(!soup.was_updated());

    let bowl = catalog.find("grain-bowl").unwrap();
    assert!(bowl.is_modular());
    assert!(bowl.was_updated());
    assert_eq!(bowl.components["base"].options[0].time_min, Some(20.0));
}

#[tokio::test]
async fn test_failed_recipe_fetch_fails_whole_load() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/recipes/index.json")
        .with_status(200)
        .with_body(r#"["tomato-soup.json", "gone.json"]"#)
        .create();
    let _soup = server
        .mock("GET", "/recipes/tomato-soup.json")
        .with_status(200)
        .with_body(SOUP)
        .create();
    let _gone = server
        .mock("GET", "/recipes/gone.json")
        .with_status(404)
        .create();

    let result = load_from(&server.url()).await;

    match result {
        Err(CatalogError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/recipes/gone.json"));
        }
        other => panic!("Expected HTTP status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_recipe_json_fails_load() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/recipes/index.json")
        .with_status(200)
        .with_body(r#"["broken.json"]"#)
        .create();
    let _broken = server
        .mock("GET", "/recipes/broken.json")
        .with_status(200)
        .with_body(r#"{"id": "broken", "title": "#)
        .create();

    let result = load_from(&server.url()).await;

    match result {
        Err(CatalogError::ParseError { file, .. }) => assert_eq!(file, "broken.json"),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_index_fails_load() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/recipes/index.json")
        .with_status(200)
        .with_body(r#"{"recipes": []}"#)
        .create();

    let result = load_from(&server.url()).await;
    assert!(matches!(result, Err(CatalogError::ParseError { .. })));
}

#[tokio::test]
async fn test_empty_index_gives_empty_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _index = server
        .mock("GET", "/recipes/index.json")
        .with_status(200)
        .with_body("[]")
        .create();

    let catalog = load_from(&server.url()).await.unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.all_tags().is_empty());
}
