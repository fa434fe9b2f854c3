//! Fallback persona sets and strategic insights.
//!
//! Used whenever the completion API is not configured or fails. Every table
//! is keyed on [`ProductCategory`], so output is fully deterministic for a
//! given product description.

use super::category::ProductCategory;
use super::persona::Persona;

/// Returns the fixed persona triple for a product description.
pub fn contextual_personas(product_description: &str) -> Vec<Persona> {
    personas_for(ProductCategory::classify(product_description))
}

/// The fixed persona triple for a category.
pub fn personas_for(category: ProductCategory) -> Vec<Persona> {
    match category {
        ProductCategory::Food => vec![
            Persona::new(
                "Marco Rossi",
                38,
                "Professional Chef",
                "Perfectionist, values technique, skeptical of shortcuts, judges apps by recipe authenticity",
            ),
            Persona::new(
                "Jennifer Walsh",
                34,
                "Working Mother of Two",
                "Time-starved, needs family-friendly meals, values convenience but wants healthy options",
            ),
            Persona::new(
                "David Chen",
                28,
                "Food Blogger",
                "Trend-focused, loves experimenting, visual presentation matters, shares on social media",
            ),
        ],
        ProductCategory::Fitness => vec![
            Persona::new(
                "Alex Thompson",
                32,
                "Software Engineer",
                "Analytical, data-driven, wants measurable results, skeptical of fitness fads",
            ),
            Persona::new(
                "Maya Patel",
                28,
                "Yoga Instructor",
                "Holistic approach, values mind-body connection, prefers low-impact workouts",
            ),
            Persona::new(
                "James Wilson",
                45,
                "Busy Executive",
                "Time-poor, needs efficiency, willing to pay for convenience, likes quick results",
            ),
        ],
        ProductCategory::Finance => vec![
            Persona::new(
                "Sarah Chen",
                35,
                "Financial Analyst",
                "Risk-averse, detail-oriented, wants security and transparency",
            ),
            Persona::new(
                "Marcus Webb",
                24,
                "Recent Graduate",
                "New to investing, wants education, needs simple interface, budget-conscious",
            ),
            Persona::new(
                "Linda Martinez",
                52,
                "Small Business Owner",
                "Practical, values time-saving tools, wants to separate business/personal finances",
            ),
        ],
        ProductCategory::Education => vec![
            Persona::new(
                "Priya Sharma",
                41,
                "High School Teacher",
                "Curriculum-focused, pragmatic, wary of screen time, wants measurable learning outcomes",
            ),
            Persona::new(
                "Tom Becker",
                19,
                "College Student",
                "Early adopter, enthusiastic, studies in short bursts, price-sensitive",
            ),
            Persona::new(
                "Angela Moore",
                36,
                "Corporate Trainer",
                "Outcome-driven, values structured content, compares everything against existing tools",
            ),
        ],
        ProductCategory::Travel => vec![
            Persona::new(
                "Elena Petrova",
                29,
                "Travel Blogger",
                "Early adopter, enthusiastic, documents everything, values unique experiences",
            ),
            Persona::new(
                "Robert Hayes",
                47,
                "Sales Director",
                "Frequent flyer, time-starved, wants seamless logistics, loyal to what works",
            ),
            Persona::new(
                "Grace Liu",
                33,
                "Graphic Designer",
                "Budget-conscious, plans months ahead, risk-averse about bookings",
            ),
        ],
        ProductCategory::Shopping => vec![
            Persona::new(
                "Nina Alvarez",
                26,
                "Social Media Manager",
                "Trend-focused, early adopter, impulse buyer, shares finds with friends",
            ),
            Persona::new(
                "Paul Greene",
                39,
                "Operations Manager",
                "Analytical, skeptical of discounts, compares prices across sites",
            ),
            Persona::new(
                "Martha Kim",
                55,
                "Office Administrator",
                "Budget-conscious, values customer service, risk-averse with new retailers",
            ),
        ],
        ProductCategory::General => vec![
            Persona::new(
                "Marcus Chen",
                32,
                "Software Engineer",
                "Analytical, data-driven, skeptical of marketing claims, values efficiency",
            ),
            Persona::new(
                "Sarah Williams",
                28,
                "Marketing Director",
                "Early adopter, enthusiastic, values convenience and design",
            ),
            Persona::new(
                "Lisa Rodriguez",
                35,
                "Elementary School Teacher",
                "Budget-conscious, needs simplicity, risk-averse, values community",
            ),
        ],
    }
}

/// Returns the category-keyed strategic insight for a product description.
///
/// Independent table from the persona triples, selected by the same
/// keyword-priority mechanism.
pub fn contextual_insight(product_description: &str) -> String {
    insight_for(ProductCategory::classify(product_description))
}

/// The fixed strategic insight for a category.
pub fn insight_for(category: ProductCategory) -> String {
    match category {
        ProductCategory::Food => {
            "The feedback shows strong appeal among time-pressed home cooks, with skepticism \
             from professionals about recipe quality. Lead with time-saving and waste-reduction \
             benefits in marketing, and consider showcasing recipe authenticity to win over the \
             purists. Visual, shareable content would help reach the food-blogger audience."
        }
        ProductCategory::Fitness => {
            "Participants respond well to personalization but want proof of results. Emphasize \
             measurable progress tracking in the go-to-market message, and use the trial period \
             to demonstrate quick wins for time-poor users. Low-impact options would widen the \
             audience beyond data-driven optimizers."
        }
        ProductCategory::Finance => {
            "Trust and transparency dominate the feedback. Security credentials and \
             plain-language explanations should anchor the launch messaging, with educational \
             content to onboard less experienced users. Small-business workflows are a \
             differentiator worth highlighting."
        }
        ProductCategory::Education => {
            "Educators want evidence of learning outcomes while students care about price and \
             fitting study into short sessions. Publish efficacy data early, keep an accessible \
             entry tier, and position the product as a complement to existing curricula rather \
             than a replacement."
        }
        ProductCategory::Travel => {
            "Enthusiast travelers are ready to adopt immediately, but frequent business \
             travelers need reliability guarantees before switching tools. Emphasize seamless \
             logistics and transparent pricing, and court the blogger audience for organic \
             word-of-mouth."
        }
        ProductCategory::Shopping => {
            "Impulse-driven shoppers respond to discovery features while analytical buyers \
             compare prices elsewhere. Price-match transparency and a generous returns policy \
             would address the skeptics, and social sharing hooks would amplify the \
             trend-focused segment."
        }
        ProductCategory::General => {
            "Based on the focus group feedback, there's genuine interest in the product \
             concept, but concerns about pricing and ease of use are consistent across \
             personas. Consider emphasizing the free trial period in marketing to reduce \
             adoption friction. The convenience factor is a strong selling point, but you'll \
             need to provide concrete evidence of value to convert skeptical users. Early \
             adopter feedback suggests potential for strong word-of-mouth if the experience \
             exceeds expectations."
        }
    }
    .to_string()
}
