use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub city: String,
    pub title: String,
    pub bio: String,
    pub tags: Vec<String>,
    pub photos: Vec<String>,
}

const TAGS: &[&str] = &[
    "Coffee",
    "Hiking",
    "Movies",
    "Live Music",
    "Board Games",
    "Cats",
    "Dogs",
    "Traveler",
    "Foodie",
    "Tech",
    "Art",
    "Runner",
    "Climbing",
    "Books",
    "Yoga",
    "Photography",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Sam", "Jordan", "Taylor", "Casey", "Avery", "Riley", "Morgan", "Quinn", "Cameron",
    "Jamie", "Drew", "Parker", "Reese", "Emerson", "Rowan", "Shawn", "Harper", "Skyler", "Devon",
];

const CITIES: &[&str] = &[
    "Brooklyn",
    "Manhattan",
    "Queens",
    "Jersey City",
    "Hoboken",
    "Astoria",
    "Williamsburg",
    "Bushwick",
    "Harlem",
    "Lower East Side",
];

const JOBS: &[&str] = &[
    "Product Designer",
    "Software Engineer",
    "Data Analyst",
    "Barista",
    "Teacher",
    "Photographer",
    "Architect",
    "Chef",
    "Nurse",
    "Marketing Manager",
    "UX Researcher",
];

const BIOS: &[&str] = &[
    "Weekend hikes and weekday lattes.",
    "Dog parent. Amateur chef. Karaoke enthusiast.",
    "Trying every taco in the city — for science.",
    "Bookstore browser and movie quote machine.",
    "Gym sometimes, Netflix always.",
    "Looking for the best slice in town.",
    "Will beat you at Mario Kart.",
    "Currently planning the next trip.",
];

const PHOTO_SEEDS: &[&str] = &[
    "1515462277126-2b47b9fa09e6",
    "1520975916090-3105956dac38",
    "1519340241574-2cec6aef0c01",
    "1554151228-14d9def656e4",
    "1548142813-c348350df52b",
    "1517841905240-472988babdf9",
    "1535713875002-d1d0cf377fde",
    "1545996124-0501ebae84d0",
    "1524504388940-b1c1722653e1",
    "1531123897727-8f129e1688ce",
];

const TAGS_PER_PROFILE: usize = 4;

// 2–4 photos each; ids are unique within a batch and stable for the card's
// lifetime.
pub fn generate(count: usize) -> Vec<Profile> {
    let mut rng = rand::thread_rng();
    (0..count).map(|index| random_profile(index, &mut rng)).collect()
}

fn random_profile(index: usize, rng: &mut impl Rng) -> Profile {
    let mut seeds: Vec<&str> = PHOTO_SEEDS.to_vec();
    seeds.shuffle(rng);
    let photo_count = rng.gen_range(2..=4);

    Profile {
        id: format!("p-{}-{:08x}", index, rng.gen::<u32>()),
        name: sample(FIRST_NAMES, rng),
        age: rng.gen_range(18..40),
        city: sample(CITIES, rng),
        title: sample(JOBS, rng),
        bio: sample(BIOS, rng),
        tags: TAGS
            .choose_multiple(rng, TAGS_PER_PROFILE)
            .map(|tag| tag.to_string())
            .collect(),
        photos: seeds[..photo_count].iter().map(|seed| photo_url(seed)).collect(),
    }
}

fn sample(pool: &[&str], rng: &mut impl Rng) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

fn photo_url(seed: &str) -> String {
    format!("https://images.unsplash.com/photo-{seed}?auto=format&fit=crop&w=1200&q=80")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_profile_has_two_to_four_photos() {
        for profile in generate(20) {
            assert!((2..=4).contains(&profile.photos.len()), "{:?}", profile.photos);
        }
    }

    #[test]
    fn photos_within_a_profile_are_distinct() {
        for profile in generate(20) {
            let unique: HashSet<_> = profile.photos.iter().collect();
            assert_eq!(unique.len(), profile.photos.len());
        }
    }

    #[test]
    fn tags_are_unique() {
        for profile in generate(20) {
            let unique: HashSet<_> = profile.tags.iter().collect();
            assert_eq!(unique.len(), profile.tags.len());
        }
    }

    #[test]
    fn ids_are_unique_within_a_batch() {
        let profiles = generate(50);
        let unique: HashSet<_> = profiles.iter().map(|p| &p.id).collect();
        assert_eq!(unique.len(), profiles.len());
    }

    #[test]
    fn ages_stay_in_range() {
        for profile in generate(20) {
            assert!((18..40).contains(&profile.age));
        }
    }
}
