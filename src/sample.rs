//! Built-in sample recipes for trying the tool without typing one in

use crate::models::Recipe;

pub fn sample_recipes() -> Vec<Recipe> {
    // Boiled Egg: 78 calories, under the default threshold
    let mut egg = Recipe::new("Boiled Egg");
    egg.add_ingredient("Egg", 78, "Protein");
    egg.add_step("Boil water");
    egg.add_step("Add egg");
    egg.add_step("Cook for 9 minutes");

    // Pancakes: 505 calories, over the default threshold
    let mut pancakes = Recipe::new("Pancakes");
    pancakes.add_ingredient("Flour", 228, "Grain");
    pancakes.add_ingredient("Milk", 103, "Dairy");
    pancakes.add_ingredient("Egg", 78, "Protein");
    pancakes.add_ingredient("Butter", 96, "Fat");
    pancakes.add_step("Whisk flour, milk and egg");
    pancakes.add_step("Melt butter in a pan");
    pancakes.add_step("Fry until golden on both sides");

    // Garden Salad: 120 calories
    let mut salad = Recipe::new("Garden Salad");
    salad.add_ingredient("Lettuce", 15, "Vegetable");
    salad.add_ingredient("Tomato", 22, "Vegetable");
    salad.add_ingredient("Cucumber", 16, "Vegetable");
    salad.add_ingredient("Vinaigrette", 67, "Fat");
    salad.add_step("Chop the vegetables");
    salad.add_step("Toss with vinaigrette");

    vec![egg, pancakes, salad]
}
