// SPDX-License-Identifier: MPL-2.0
//! A small rotation of space facts shown in the gallery's empty state.

use rand::Rng;

pub const SPACE_FACTS: [&str; 10] = [
    "A day on Venus is longer than its year! Venus rotates so slowly that one day lasts 243 Earth days, while its year is only 225 Earth days.",
    "The International Space Station travels at 17,500 mph and orbits Earth every 90 minutes.",
    "Saturn's moon Titan has lakes and rivers made of liquid methane and ethane instead of water.",
    "Neutron stars are so dense that a teaspoon of neutron star material would weigh about 6 billion tons on Earth.",
    "The largest volcano in our solar system is Olympus Mons on Mars, which is nearly 14 miles high and 370 miles across.",
    "Jupiter's Great Red Spot is a storm that has been raging for at least 400 years and is larger than Earth.",
    "Astronauts' hearts become more spherical in space due to the lack of gravity.",
    "The Milky Way galaxy is on a collision course with the Andromeda galaxy, but don't worry - it won't happen for 4.5 billion years!",
    "One million Earths could fit inside the Sun, but the Sun is just an average-sized star.",
    "Space is completely silent because sound waves need a medium to travel through, and space is a vacuum.",
];

/// Picks one fact at random; called once at startup.
pub fn random_fact() -> &'static str {
    let index = rand::rng().random_range(0..SPACE_FACTS.len());
    SPACE_FACTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_fact_comes_from_the_set() {
        let fact = random_fact();
        assert!(SPACE_FACTS.contains(&fact));
    }
}
