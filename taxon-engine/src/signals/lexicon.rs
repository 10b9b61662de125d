//! Static cue lexicon backing the lexical signal extractor.
//!
//! Each cue is a lowercase phrase that votes for one domain, optionally
//! pinned to a leaf. Weights: 1.0 for cues that name the topic outright,
//! 0.75 for strong associations, 0.5 for weak ones. Leaf names here must
//! be members of the built-in taxonomy.

use taxon_core::taxonomy::Domain;

/// One lexicon entry. Patterns are matched case-insensitively at word
/// boundaries over the record's combined question/answer/option text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CueDef {
    pub pattern: &'static str,
    pub domain: Domain,
    pub leaf: Option<&'static str>,
    pub weight: f64,
}

const fn leaf(
    pattern: &'static str,
    domain: Domain,
    leaf: &'static str,
    weight: f64,
) -> CueDef {
    CueDef {
        pattern,
        domain,
        leaf: Some(leaf),
        weight,
    }
}

const fn dom(pattern: &'static str, domain: Domain, weight: f64) -> CueDef {
    CueDef {
        pattern,
        domain,
        leaf: None,
        weight,
    }
}

pub(crate) const CUES: &[CueDef] = &[
    // English
    leaf("synonym", Domain::Eng, "Synonyms", 1.0),
    leaf("most nearly the same in meaning", Domain::Eng, "Synonyms", 1.0),
    leaf("similar in meaning", Domain::Eng, "Synonyms", 1.0),
    leaf("antonym", Domain::Eng, "Antonyms", 1.0),
    leaf("opposite in meaning", Domain::Eng, "Antonyms", 1.0),
    leaf("idiom", Domain::Eng, "Idioms", 1.0),
    leaf("idioms and phrases", Domain::Eng, "Idioms", 1.0),
    leaf("phrase", Domain::Eng, "Idioms", 0.5),
    leaf("one word substitution", Domain::Eng, "OneWordSubstitution", 1.0),
    leaf("one word for", Domain::Eng, "OneWordSubstitution", 0.75),
    leaf("spot the error", Domain::Eng, "SpottingErrors", 1.0),
    leaf("find the error", Domain::Eng, "SpottingErrors", 1.0),
    leaf("grammatical error", Domain::Eng, "SpottingErrors", 0.75),
    leaf("fill in the blank", Domain::Eng, "FillInTheBlanks", 1.0),
    leaf("improve the sentence", Domain::Eng, "SentenceImprovement", 1.0),
    leaf("sentence improvement", Domain::Eng, "SentenceImprovement", 1.0),
    leaf("improvement of the underlined part", Domain::Eng, "SentenceImprovement", 1.0),
    leaf("passage", Domain::Eng, "Comprehension", 0.75),
    leaf("comprehension", Domain::Eng, "Comprehension", 1.0),
    leaf("correctly spelt", Domain::Eng, "Vocabulary", 1.0),
    leaf("spelling", Domain::Eng, "Vocabulary", 0.75),
    leaf("active voice", Domain::Eng, "Grammar", 1.0),
    leaf("passive voice", Domain::Eng, "Grammar", 1.0),
    leaf("direct speech", Domain::Eng, "Grammar", 1.0),
    leaf("indirect speech", Domain::Eng, "Grammar", 1.0),
    leaf("narration", Domain::Eng, "Grammar", 1.0),
    leaf("definite article", Domain::Eng, "Grammar", 1.0),
    leaf("indefinite article", Domain::Eng, "Grammar", 1.0),
    leaf("preposition", Domain::Eng, "Grammar", 0.75),
    leaf("conjunction", Domain::Eng, "Grammar", 0.75),
    leaf("tense", Domain::Eng, "Grammar", 0.75),
    // Mathematics
    leaf("per cent", Domain::Math, "Percentage", 1.0),
    leaf("percent", Domain::Math, "Percentage", 1.0),
    leaf("percentage", Domain::Math, "Percentage", 1.0),
    leaf("profit", Domain::Math, "ProfitLoss", 1.0),
    leaf("loss", Domain::Math, "ProfitLoss", 0.5),
    leaf("discount", Domain::Math, "ProfitLoss", 0.75),
    leaf("cost price", Domain::Math, "ProfitLoss", 1.0),
    leaf("selling price", Domain::Math, "ProfitLoss", 1.0),
    leaf("marked price", Domain::Math, "ProfitLoss", 1.0),
    leaf("simple interest", Domain::Math, "SimpleInterest", 1.0),
    leaf("compound interest", Domain::Math, "CompoundInterest", 1.0),
    leaf("compounded annually", Domain::Math, "CompoundInterest", 1.0),
    leaf("rate of interest", Domain::Math, "SimpleInterest", 0.5),
    leaf("ratio", Domain::Math, "RatioProportion", 1.0),
    leaf("proportion", Domain::Math, "RatioProportion", 0.75),
    leaf("complete the work", Domain::Math, "TimeAndWork", 1.0),
    leaf("finish the work", Domain::Math, "TimeAndWork", 1.0),
    leaf("working together", Domain::Math, "TimeAndWork", 0.75),
    leaf("km/h", Domain::Math, "TimeSpeedDistance", 1.0),
    leaf("kmph", Domain::Math, "TimeSpeedDistance", 1.0),
    leaf("speed", Domain::Math, "TimeSpeedDistance", 1.0),
    leaf("train", Domain::Math, "TimeSpeedDistance", 0.75),
    leaf("upstream", Domain::Math, "TimeSpeedDistance", 1.0),
    leaf("downstream", Domain::Math, "TimeSpeedDistance", 1.0),
    leaf("lcm", Domain::Math, "NumberSystem", 1.0),
    leaf("hcf", Domain::Math, "NumberSystem", 1.0),
    leaf("divisible by", Domain::Math, "NumberSystem", 1.0),
    leaf("remainder", Domain::Math, "NumberSystem", 0.75),
    leaf("prime number", Domain::Math, "NumberSystem", 1.0),
    leaf("simplify", Domain::Math, "Simplification", 1.0),
    leaf("simplified", Domain::Math, "Simplification", 0.75),
    leaf("equation", Domain::Math, "Algebra", 0.75),
    leaf("quadratic", Domain::Math, "Algebra", 1.0),
    leaf("polynomial", Domain::Math, "Algebra", 1.0),
    leaf("triangle", Domain::Math, "Geometry", 1.0),
    leaf("circle", Domain::Math, "Geometry", 0.75),
    leaf("angle", Domain::Math, "Geometry", 0.75),
    leaf("chord", Domain::Math, "Geometry", 1.0),
    leaf("tangent", Domain::Math, "Geometry", 1.0),
    leaf("trigonometry", Domain::Math, "Trigonometry", 1.0),
    leaf("trigonometric", Domain::Math, "Trigonometry", 1.0),
    leaf("sin", Domain::Math, "Trigonometry", 1.0),
    leaf("cos", Domain::Math, "Trigonometry", 1.0),
    leaf("tan", Domain::Math, "Trigonometry", 1.0),
    leaf("cot", Domain::Math, "Trigonometry", 1.0),
    leaf("sec", Domain::Math, "Trigonometry", 0.75),
    leaf("cosec", Domain::Math, "Trigonometry", 1.0),
    leaf("cylinder", Domain::Math, "Mensuration", 1.0),
    leaf("cone", Domain::Math, "Mensuration", 1.0),
    leaf("sphere", Domain::Math, "Mensuration", 1.0),
    leaf("cuboid", Domain::Math, "Mensuration", 1.0),
    leaf("volume", Domain::Math, "Mensuration", 0.75),
    leaf("surface area", Domain::Math, "Mensuration", 1.0),
    leaf("mean", Domain::Math, "Statistics", 0.5),
    leaf("median", Domain::Math, "Statistics", 1.0),
    leaf("mode", Domain::Math, "Statistics", 0.5),
    leaf("average", Domain::Math, "Statistics", 0.75),
    // General intelligence
    leaf("analogy", Domain::Gi, "Analogy", 1.0),
    leaf("is related to", Domain::Gi, "Analogy", 1.0),
    leaf("series", Domain::Gi, "Series", 1.0),
    leaf("comes next", Domain::Gi, "Series", 0.75),
    leaf("coded", Domain::Gi, "CodingDecoding", 1.0),
    leaf("code language", Domain::Gi, "CodingDecoding", 1.0),
    leaf("decoded", Domain::Gi, "CodingDecoding", 1.0),
    leaf("blood relation", Domain::Gi, "BloodRelations", 1.0),
    leaf("brother of", Domain::Gi, "BloodRelations", 0.75),
    leaf("sister of", Domain::Gi, "BloodRelations", 0.75),
    leaf("father of", Domain::Gi, "BloodRelations", 0.75),
    leaf("mother of", Domain::Gi, "BloodRelations", 0.75),
    leaf("facing north", Domain::Gi, "Direction", 1.0),
    leaf("facing south", Domain::Gi, "Direction", 1.0),
    leaf("turns left", Domain::Gi, "Direction", 1.0),
    leaf("turns right", Domain::Gi, "Direction", 1.0),
    leaf("syllogism", Domain::Gi, "Syllogism", 1.0),
    leaf("conclusions follow", Domain::Gi, "Syllogism", 1.0),
    leaf("venn diagram", Domain::Gi, "VennDiagram", 1.0),
    leaf("seating arrangement", Domain::Gi, "Puzzle", 1.0),
    leaf("sitting in a row", Domain::Gi, "Puzzle", 1.0),
    leaf("puzzle", Domain::Gi, "Puzzle", 1.0),
    leaf("mirror image", Domain::Gi, "NonVerbal", 1.0),
    leaf("water image", Domain::Gi, "NonVerbal", 1.0),
    leaf("embedded figure", Domain::Gi, "NonVerbal", 1.0),
    leaf("paper folding", Domain::Gi, "NonVerbal", 1.0),
    // General knowledge
    leaf("president of", Domain::Gk, "Polity", 1.0),
    leaf("prime minister", Domain::Gk, "Polity", 1.0),
    leaf("constitution", Domain::Gk, "Polity", 1.0),
    leaf("amendment", Domain::Gk, "Polity", 1.0),
    leaf("article", Domain::Gk, "Polity", 0.5),
    leaf("parliament", Domain::Gk, "Polity", 1.0),
    leaf("lok sabha", Domain::Gk, "Polity", 1.0),
    leaf("rajya sabha", Domain::Gk, "Polity", 1.0),
    leaf("battle of", Domain::Gk, "History", 1.0),
    leaf("dynasty", Domain::Gk, "History", 1.0),
    leaf("emperor", Domain::Gk, "History", 1.0),
    leaf("empire", Domain::Gk, "History", 0.75),
    leaf("mughal", Domain::Gk, "History", 1.0),
    leaf("independence movement", Domain::Gk, "History", 1.0),
    leaf("river", Domain::Gk, "Geography", 0.75),
    leaf("mountain", Domain::Gk, "Geography", 0.75),
    leaf("capital of", Domain::Gk, "Geography", 1.0),
    leaf("plateau", Domain::Gk, "Geography", 1.0),
    leaf("ocean", Domain::Gk, "Geography", 0.75),
    leaf("monsoon", Domain::Gk, "Geography", 1.0),
    leaf("gdp", Domain::Gk, "Economy", 1.0),
    leaf("inflation", Domain::Gk, "Economy", 1.0),
    leaf("reserve bank", Domain::Gk, "Economy", 1.0),
    leaf("fiscal", Domain::Gk, "Economy", 1.0),
    leaf("budget", Domain::Gk, "Economy", 0.75),
    leaf("vitamin", Domain::Gk, "Science", 1.0),
    leaf("photosynthesis", Domain::Gk, "Science", 1.0),
    leaf("atom", Domain::Gk, "Science", 0.75),
    leaf("molecule", Domain::Gk, "Science", 1.0),
    leaf("planet", Domain::Gk, "Science", 0.75),
    leaf("olympics", Domain::Gk, "Sports", 1.0),
    leaf("world cup", Domain::Gk, "Sports", 1.0),
    leaf("cricket", Domain::Gk, "Sports", 1.0),
    leaf("tournament", Domain::Gk, "Sports", 0.75),
    leaf("medal", Domain::Gk, "Sports", 0.75),
    leaf("festival", Domain::Gk, "ArtAndCulture", 0.75),
    leaf("dance form", Domain::Gk, "ArtAndCulture", 1.0),
    leaf("classical dance", Domain::Gk, "ArtAndCulture", 1.0),
    leaf("temple", Domain::Gk, "ArtAndCulture", 0.75),
    leaf("currency of", Domain::Gk, "StaticGK", 1.0),
    leaf("national animal", Domain::Gk, "StaticGK", 1.0),
    leaf("headquarters of", Domain::Gk, "StaticGK", 1.0),
    leaf("current affairs", Domain::Gk, "CurrentAffairs", 1.0),
    // Domain-only cues
    dom("underlined", Domain::Eng, 0.5),
    dom("sentence", Domain::Eng, 0.5),
    dom("meaning", Domain::Eng, 0.5),
    dom("word", Domain::Eng, 0.25),
    dom("value of", Domain::Math, 0.5),
    dom("how many", Domain::Gi, 0.25),
    dom("which of the following", Domain::Gk, 0.25),
];

#[cfg(test)]
mod tests {
    use super::*;
    use taxon_core::taxonomy::TaxonomyRegistry;

    #[test]
    fn test_every_leaf_cue_names_a_taxonomy_leaf() {
        let registry = TaxonomyRegistry::builtin();
        for cue in CUES {
            if let Some(leaf) = cue.leaf {
                let tag = format!("{}::{}", cue.domain.as_str(), leaf);
                assert_eq!(
                    registry.lookup(&tag),
                    Some(cue.domain),
                    "lexicon cue {:?} points at unknown leaf {tag}",
                    cue.pattern
                );
            }
        }
    }

    #[test]
    fn test_weights_are_positive() {
        for cue in CUES {
            assert!(cue.weight > 0.0, "cue {:?} has bad weight", cue.pattern);
        }
    }
}
