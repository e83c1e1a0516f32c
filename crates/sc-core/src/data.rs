//! Built-in constellation catalog: 22 of the IAU 88 with hand-laid
//! figure geometry. Positions live in the normalized unit square
//! (y grows downward, canvas convention); brightness is relative
//! within the whole catalog, 1.0 = brightest named star.

use crate::catalog::{BrightnessTier, ConstellationRecord, ShapeClass, Star};
use crate::catalog::{BrightnessTier::*, ShapeClass::*};

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    abbreviation: &str,
    genitive: &str,
    story: &str,
    themes: &[&str],
    visual_character: &str,
    shape_class: ShapeClass,
    brightness_tier: BrightnessTier,
    stars: &[(f64, f64, f64)],
) -> ConstellationRecord {
    ConstellationRecord {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        genitive: genitive.to_string(),
        story: story.to_string(),
        themes: themes.iter().map(|t| t.to_string()).collect(),
        visual_character: visual_character.to_string(),
        shape_class,
        brightness_tier,
        stars: stars
            .iter()
            .map(|&(x, y, brightness)| Star { x, y, brightness })
            .collect(),
    }
}

pub fn builtin_records() -> Vec<ConstellationRecord> {
    vec![
        record(
            "Andromeda", "And", "Andromedae",
            "Chained princess rescued by Perseus",
            &["sacrifice", "rescue", "beauty in chains"],
            "Linear with graceful curves, horizontal spread",
            Figure, Moderate,
            &[
                (0.10, 0.55, 0.80), (0.28, 0.50, 0.70), (0.46, 0.48, 0.60),
                (0.64, 0.44, 0.70), (0.82, 0.38, 0.90), (0.90, 0.30, 0.50),
                (0.72, 0.60, 0.40),
            ],
        ),
        record(
            "Aquarius", "Aqr", "Aquarii",
            "Water bearer pouring from celestial jar",
            &["flow", "abundance", "giving"],
            "Cascading downward flow, dispersed",
            Figure, Moderate,
            &[
                (0.30, 0.15, 0.70), (0.45, 0.20, 0.80), (0.55, 0.30, 0.60),
                (0.50, 0.45, 0.50), (0.60, 0.55, 0.60), (0.55, 0.70, 0.50),
                (0.65, 0.80, 0.40), (0.60, 0.90, 0.40),
            ],
        ),
        record(
            "Aquila", "Aql", "Aquilae",
            "Eagle carrying Zeus's thunderbolts",
            &["power", "divine messenger", "soaring"],
            "Wings spread wide, central bright star",
            Animal, Bright,
            &[
                (0.50, 0.45, 1.00), (0.30, 0.35, 0.60), (0.70, 0.35, 0.60),
                (0.15, 0.30, 0.40), (0.85, 0.30, 0.40), (0.50, 0.70, 0.50),
            ],
        ),
        record(
            "Aries", "Ari", "Arietis",
            "Golden fleece ram",
            &["courage", "sacrifice", "precious treasure"],
            "Compact curved form, ram's horn",
            Animal, Bright,
            &[
                (0.35, 0.50, 0.90), (0.45, 0.42, 0.80), (0.55, 0.40, 0.50),
                (0.62, 0.45, 0.40),
            ],
        ),
        record(
            "Cancer", "Cnc", "Cancri",
            "Crab sent by Hera to distract Hercules",
            &["persistence", "protective shell"],
            "Compact cluster, crab body",
            Animal, Faint,
            &[
                (0.45, 0.45, 0.40), (0.55, 0.45, 0.35), (0.50, 0.55, 0.45),
                (0.42, 0.58, 0.30), (0.58, 0.60, 0.30),
            ],
        ),
        record(
            "Canis Major", "CMa", "Canis Majoris",
            "Greater hunting dog following Orion",
            &["loyalty", "hunting", "companionship"],
            "Compact with brilliant Sirius, dynamic stance",
            Animal, Bright,
            &[
                (0.45, 0.30, 1.00), (0.55, 0.40, 0.50), (0.40, 0.50, 0.45),
                (0.60, 0.55, 0.40), (0.35, 0.65, 0.50), (0.50, 0.70, 0.55),
                (0.62, 0.75, 0.40), (0.45, 0.85, 0.35),
            ],
        ),
        record(
            "Capricornus", "Cap", "Capricorni",
            "Sea-goat with fish tail",
            &["duality", "earth and water", "ambition"],
            "Triangular form, goat's head to fish tail",
            Animal, Moderate,
            &[
                (0.25, 0.35, 0.70), (0.75, 0.40, 0.60), (0.50, 0.70, 0.65),
                (0.35, 0.50, 0.40), (0.62, 0.52, 0.40), (0.45, 0.62, 0.35),
                (0.58, 0.60, 0.30),
            ],
        ),
        record(
            "Cassiopeia", "Cas", "Cassiopeiae",
            "Vain queen bound to throne",
            &["pride", "punishment", "eternal vigilance"],
            "Distinctive W or M shape, highly recognizable",
            Geometric, Bright,
            &[
                (0.12, 0.52, 0.80), (0.31, 0.38, 0.90), (0.50, 0.50, 0.80),
                (0.69, 0.36, 0.70), (0.88, 0.46, 0.60),
            ],
        ),
        record(
            "Centaurus", "Cen", "Centauri",
            "Wise centaur, teacher of heroes",
            &["wisdom", "healing", "mentorship"],
            "Large spread, bow-wielding stance",
            Hunter, Bright,
            &[
                (0.15, 0.75, 1.00), (0.25, 0.80, 0.90), (0.35, 0.60, 0.60),
                (0.45, 0.50, 0.60), (0.30, 0.45, 0.50), (0.55, 0.40, 0.55),
                (0.65, 0.30, 0.50), (0.50, 0.25, 0.45), (0.75, 0.45, 0.40),
                (0.85, 0.55, 0.40), (0.60, 0.65, 0.45),
            ],
        ),
        record(
            "Cygnus", "Cyg", "Cygni",
            "Swan, Zeus in disguise, Northern Cross",
            &["transformation", "grace", "divine deception"],
            "Perfect cross or swan in flight",
            Geometric, Bright,
            &[
                (0.50, 0.20, 1.00), (0.50, 0.45, 0.70), (0.28, 0.50, 0.60),
                (0.72, 0.50, 0.60), (0.50, 0.75, 0.80), (0.50, 0.60, 0.40),
            ],
        ),
        record(
            "Gemini", "Gem", "Geminorum",
            "Twin brothers Castor and Pollux",
            &["brotherhood", "duality", "eternal bond"],
            "Twin parallel figures, two bright stars",
            Figure, Bright,
            &[
                (0.35, 0.20, 0.90), (0.65, 0.22, 1.00), (0.33, 0.45, 0.50),
                (0.67, 0.48, 0.50), (0.30, 0.65, 0.45), (0.70, 0.68, 0.45),
                (0.35, 0.85, 0.40), (0.62, 0.85, 0.40),
            ],
        ),
        record(
            "Leo", "Leo", "Leonis",
            "Nemean lion slain by Hercules",
            &["courage", "royalty", "invincibility"],
            "Sickle for head and mane, triangle for body",
            Animal, Bright,
            &[
                (0.25, 0.60, 1.00), (0.22, 0.45, 0.60), (0.30, 0.32, 0.55),
                (0.42, 0.25, 0.50), (0.50, 0.32, 0.45), (0.45, 0.45, 0.40),
                (0.75, 0.35, 0.60), (0.85, 0.55, 0.80), (0.60, 0.60, 0.50),
            ],
        ),
        record(
            "Lyra", "Lyr", "Lyrae",
            "Orpheus's lyre",
            &["music", "art", "lost love"],
            "Compact parallelogram, small but bright",
            Geometric, Bright,
            &[
                (0.45, 0.25, 1.00), (0.52, 0.38, 0.50), (0.42, 0.50, 0.45),
                (0.56, 0.52, 0.40), (0.47, 0.64, 0.45),
            ],
        ),
        record(
            "Orion", "Ori", "Orionis",
            "Great hunter with belt and sword",
            &["hunting prowess", "tragic death", "grandeur"],
            "Hourglass with distinctive belt, large and commanding",
            Hunter, Bright,
            &[
                (0.50, 0.10, 0.40), (0.35, 0.20, 0.95), (0.65, 0.25, 0.70),
                (0.44, 0.48, 0.75), (0.50, 0.50, 0.80), (0.56, 0.52, 0.75),
                (0.52, 0.62, 0.50), (0.38, 0.75, 0.60), (0.65, 0.78, 0.90),
                (0.35, 0.80, 0.55),
            ],
        ),
        record(
            "Pegasus", "Peg", "Pegasi",
            "Winged horse sprung from Medusa's blood",
            &["inspiration", "flight", "poetic achievement"],
            "Great square with extended lines for head and legs",
            Geometric, Bright,
            &[
                (0.35, 0.30, 0.80), (0.65, 0.30, 0.80), (0.65, 0.60, 0.75),
                (0.35, 0.60, 0.70), (0.20, 0.25, 0.50), (0.15, 0.45, 0.45),
                (0.80, 0.20, 0.50), (0.85, 0.70, 0.40), (0.75, 0.75, 0.40),
            ],
        ),
        record(
            "Perseus", "Per", "Persei",
            "Hero who slew Medusa",
            &["heroism", "clever strategy", "reflection"],
            "Curved chain from Cassiopeia, Medusa's head",
            Hunter, Bright,
            &[
                (0.30, 0.15, 0.70), (0.40, 0.28, 0.90), (0.55, 0.30, 0.45),
                (0.45, 0.42, 0.60), (0.32, 0.45, 0.40), (0.42, 0.56, 0.85),
                (0.50, 0.68, 0.50), (0.60, 0.78, 0.45),
            ],
        ),
        record(
            "Sagittarius", "Sgr", "Sagittarii",
            "Centaur archer aiming at Scorpius",
            &["aim", "philosophy", "adventure"],
            "Teapot shape, pointing toward galactic center",
            Hunter, Bright,
            &[
                (0.30, 0.40, 0.70), (0.42, 0.32, 0.65), (0.55, 0.35, 0.80),
                (0.62, 0.45, 0.75), (0.58, 0.58, 0.70), (0.45, 0.62, 0.65),
                (0.33, 0.55, 0.60), (0.70, 0.30, 0.50), (0.20, 0.48, 0.45),
                (0.50, 0.48, 0.40),
            ],
        ),
        record(
            "Scorpius", "Sco", "Scorpii",
            "Scorpion that killed Orion",
            &["danger", "deadly beauty", "revenge"],
            "Curved tail with stinger, bright red heart",
            Animal, Bright,
            &[
                (0.16, 0.22, 0.45), (0.20, 0.30, 0.60), (0.24, 0.40, 0.70),
                (0.30, 0.50, 1.00), (0.36, 0.58, 0.60), (0.42, 0.66, 0.55),
                (0.48, 0.73, 0.50), (0.56, 0.78, 0.50), (0.64, 0.80, 0.50),
                (0.72, 0.78, 0.55), (0.78, 0.72, 0.60), (0.82, 0.64, 0.55),
            ],
        ),
        record(
            "Taurus", "Tau", "Tauri",
            "Bull form of Zeus, Pleiades sisters",
            &["strength", "passion", "pursuit"],
            "V-shaped face, Pleiades cluster",
            Animal, Bright,
            &[
                (0.55, 0.50, 1.00), (0.50, 0.45, 0.50), (0.45, 0.40, 0.45),
                (0.40, 0.35, 0.40), (0.60, 0.42, 0.45), (0.68, 0.30, 0.50),
                (0.30, 0.20, 0.60), (0.75, 0.20, 0.55),
            ],
        ),
        record(
            "Ursa Major", "UMa", "Ursae Majoris",
            "Great bear, transformed Callisto, Big Dipper",
            &["transformation", "eternal circling", "guidance"],
            "Dipper shape, circumpolar, never setting",
            Animal, Bright,
            &[
                (0.22, 0.42, 0.75), (0.36, 0.40, 0.70), (0.38, 0.58, 0.65),
                (0.22, 0.60, 0.70), (0.50, 0.50, 0.70), (0.62, 0.44, 0.75),
                (0.76, 0.36, 0.80),
            ],
        ),
        record(
            "Ursa Minor", "UMi", "Ursae Minoris",
            "Little bear, contains North Star",
            &["guidance", "steadfastness", "eternal pivot"],
            "Small dipper, Polaris at tail",
            Animal, Bright,
            &[
                (0.75, 0.25, 1.00), (0.66, 0.35, 0.45), (0.58, 0.45, 0.40),
                (0.48, 0.52, 0.50), (0.38, 0.58, 0.55), (0.36, 0.70, 0.60),
                (0.46, 0.72, 0.50),
            ],
        ),
        record(
            "Virgo", "Vir", "Virginis",
            "Maiden of harvest, justice, or purity",
            &["harvest", "innocence", "justice"],
            "Y-shaped figure, large sprawling",
            Figure, Bright,
            &[
                (0.55, 0.78, 1.00), (0.50, 0.60, 0.55), (0.45, 0.45, 0.60),
                (0.35, 0.30, 0.50), (0.25, 0.22, 0.45), (0.55, 0.32, 0.55),
                (0.65, 0.22, 0.45), (0.30, 0.50, 0.40), (0.70, 0.45, 0.40),
            ],
        ),
    ]
}
