use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use sw_core::Genre;

const FANTASY: &[&str] = &[
    "With the {antagonist} defeated, peace returns to the land. {protagonist} is hailed as a hero.",
    "The {antagonist}'s power is broken! {protagonist} claims the {reward} and ends the curse.",
    "Victory! {protagonist} has saved the kingdom from the {antagonist}'s darkness.",
];

const SCIFI: &[&str] = &[
    "The {antagonist} is destroyed! {protagonist} saves the colony and returns as a hero.",
    "With the {antagonist} defeated, the station is secured. {protagonist} has saved humanity.",
    "Victory! {protagonist} has stopped the {antagonist}'s plans and claimed the {reward}.",
];

const DETECTIVE: &[&str] = &[
    "The {antagonist} is caught! Justice is served, thanks to {protagonist}'s investigation.",
    "{protagonist} has solved the case! The {antagonist} faces justice.",
    "With the {antagonist} captured, peace is restored. {protagonist} closes the case.",
];

const HORROR: &[&str] = &[
    "The {antagonist} is vanquished! {protagonist} has ended the nightmare.",
    "With the {antagonist} defeated, the darkness lifts. {protagonist} is finally safe.",
    "Victory! {protagonist} has survived and conquered the {antagonist}.",
];

/// A closing line for a story won by defeating its antagonist.
pub fn ending(
    genre: Genre,
    protagonist: &str,
    antagonist: &str,
    reward: &str,
    rng: &mut StdRng,
) -> String {
    let lines = match genre {
        Genre::Fantasy => FANTASY,
        Genre::Scifi => SCIFI,
        Genre::Detective => DETECTIVE,
        Genre::Horror => HORROR,
    };
    let template = lines.choose(rng).copied().unwrap_or("{protagonist} is victorious!");
    template
        .replace("{protagonist}", protagonist)
        .replace("{antagonist}", antagonist)
        .replace("{reward}", reward)
}
