//! Fixed marketing phrases and filler sentences used by the description
//! normalizer. Wording is load-bearing: downstream listings already carry
//! these exact sentences.

/// Phrase whose absence (case-insensitive) triggers [`QUALITY_SENTENCE`].
pub const QUALITY_PHRASE: &str = "high quality";

/// Appended when the description never mentions quality.
pub const QUALITY_SENTENCE: &str = "This product is made from high-quality materials.";

/// Phrase whose absence (case-insensitive) triggers [`EASE_SENTENCE`].
pub const EASE_PHRASE: &str = "easy to use";

/// Appended when the description never mentions ease of use.
pub const EASE_SENTENCE: &str = "It is designed for easy use, making it perfect for everyone.";

/// Lead-in block appended as a whole before consulting [`EXTRA_FILLERS`].
pub const LEAD_FILLERS: [&str; 4] = [
    "Our product has been tested and proven effective by thousands of satisfied customers.",
    "You'll enjoy premium quality and exceptional performance compared to competitors.",
    "We stand behind our product with excellent customer service and a satisfaction guarantee.",
    "Whether you're a beginner or an expert, you'll find this product intuitive and valuable.",
];

/// Ordered filler catalog consumed one sentence at a time until the target
/// word count is reached or the catalog runs out.
pub const EXTRA_FILLERS: [&str; 10] = [
    "Each product is carefully inspected before shipping to ensure the highest quality.",
    "Our dedicated team has spent years perfecting this design.",
    "Customers consistently rate this product 5 stars for its reliability and performance.",
    "Unlike similar products on the market, ours features premium materials that last longer.",
    "You'll notice the difference in quality from the moment you unbox our product.",
    "We've thought of everything you need for a seamless experience.",
    "This product solves problems you didn't even know you had.",
    "The attention to detail in this product is what sets it apart from competitors.",
    "We've optimized every aspect of this product for maximum efficiency and user satisfaction.",
    "Backed by extensive research and development, this product represents the pinnacle of innovation.",
];
