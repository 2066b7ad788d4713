use crate::constants::SEED_AUTHOR;
use crate::models::{IdGenerator, Recipe};

/// Title, category, description, ingredients, steps, image
type SeedRow = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const SEED_ROWS: [SeedRow; 3] = [
    (
        "Simple Chocolate Cake",
        "Dessert",
        "Fluffy and easy cake.",
        "2 eggs,1 cup sugar,1/2 cup oil,1 cup milk,1 cup flour,1/2 cup cocoa,1 tbsp baking powder",
        "Beat the liquids;Mix in the dry ingredients;Bake 30-35 min",
        "images/chocolate-cake.png",
    ),
    (
        "Mediterranean Salad",
        "Starter",
        "Fresh, with tomatoes, cucumber and cheese.",
        "Cherry tomatoes,Cucumber,Olives,Feta cheese,Olive oil,Oregano",
        "Chop the vegetables;Mix everything;Season",
        "images/mediterranean-salad.png",
    ),
    (
        "Garlic and Oil Pasta",
        "Main",
        "Quick, simple and tasty.",
        "250g pasta,3 garlic cloves,Olive oil,Parsley,Salt",
        "Cook the pasta;Saute the garlic;Toss and serve",
        "images/garlic-oil-pasta.png",
    ),
];

/// Starter recipes loaded into an empty catalog
pub(crate) fn seed_recipes(ids: &mut dyn IdGenerator) -> Vec<Recipe> {
    SEED_ROWS
        .iter()
        .map(
            |&(title, category, description, ingredients, steps, image)| Recipe {
                id: ids.next_id(),
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                ingredients: ingredients.to_string(),
                steps: steps.to_string(),
                image: image.to_string(),
                author_name: SEED_AUTHOR.to_string(),
                author_user_id: None,
            },
        )
        .collect()
}
