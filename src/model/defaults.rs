//! Default product snapshot and editor templates

use super::{
    fresh_id, BoxContentItem, ComparisonRow, ContentItem, FaqItem, Feature, ItemSection,
    ProductModel,
};

fn feature(id: &str, title: &str, description: &str) -> Feature {
    Feature {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: None,
    }
}

fn row(id: &str, name: &str, ours: &str, theirs: &str) -> ComparisonRow {
    ComparisonRow {
        id: id.to_string(),
        feature_name: name.to_string(),
        product_value: ours.to_string(),
        competitor_value: theirs.to_string(),
    }
}

fn faq(id: &str, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn box_item(id: &str, text: &str) -> BoxContentItem {
    BoxContentItem {
        id: id.to_string(),
        text: text.to_string(),
        count: "1x".to_string(),
        image: None,
    }
}

/// The snapshot a fresh session starts from and `reset` restores.
///
/// Item ids are fixed so two default models compare equal.
pub fn default_model() -> ProductModel {
    ProductModel {
        headline: "Telzeal P600 Kids Tablet".into(),
        description: "The Telzeal P600 blends learning and fun in one device built for kids. \
                      A 7 inch HD screen gives a clear picture and Android keeps it easy to use."
            .into(),
        cta_text: "Safe, playful learning".into(),
        image: None,
        sold_count: "+40K".into(),
        rating: "5.0".into(),
        rating_count: "55 reviews".into(),
        stock_text: "7 left in stock".into(),

        features_title: "Product highlights".into(),
        features_subtitle: "Advanced technology for your child's comfort".into(),
        features: vec![
            feature(
                "1",
                "Eye-care screen",
                "The screen uses *blue light protection*, giving your child a *safe viewing experience* even during long sessions.",
            ),
            feature(
                "2",
                "Parental controls",
                "Gives you *full control* over what your child watches, with *daily time limits* for a healthy balance.",
            ),
        ],

        why_choose_title: "Why choose this tablet?".into(),
        why_choose_subtitle: "Three reasons it is the best pick for you".into(),
        reasons: vec![
            feature(
                "r1",
                "Digital safety you can trust",
                "Parental controls help you set screen time, manage allowed apps and limit unsuitable content.",
            ),
            feature(
                "r2",
                "Built for everyday knocks",
                "A shock-absorbing case and soft edges reduce the impact of daily drops and bumps.",
            ),
            feature(
                "r3",
                "Smooth performance for kids",
                "Plenty of RAM and storage to run learning and entertainment apps without lag.",
            ),
        ],

        comparison_title: "Why it is the better choice".into(),
        comparison_subtitle: "Telzeal P600 vs. a competing 7 inch kids tablet".into(),
        comparison_product_name: "Telzeal P600".into(),
        comparison_competitor_name: "Competing kids tablet".into(),
        comparison_rows: vec![
            row("c1", "Screen", "7\" HD + reduced eye strain", "7\" HD (usually no eye protection)"),
            row("c2", "System", "Android 10.1", "Older release or limited custom UI"),
            row("c3", "RAM", "6GB", "Usually 2GB-4GB"),
            row("c4", "Storage", "128GB", "Usually 32GB-64GB"),
        ],

        faq_title: "Frequently asked questions".into(),
        faq_subtitle: "Everything you want to know about the tablet".into(),
        faqs: vec![
            faq(
                "q1",
                "Which ages is it suitable for?",
                "Mostly preschool and primary school children; tune it to your child's age with parental controls.",
            ),
            faq(
                "q2",
                "Can I install new apps?",
                "Yes, it runs Android so you can download learning and entertainment apps.",
            ),
            faq(
                "q3",
                "Does it survive drops?",
                "The shock-absorbing case helps a lot, but a hard fall can still damage it like any device.",
            ),
            faq(
                "q4",
                "Is the screen easy on the eyes?",
                "It includes eye-strain reduction, and regular breaks are still recommended.",
            ),
            faq(
                "q5",
                "Is the camera any good?",
                "Fine for a child's basic needs such as simple photos and light video calls.",
            ),
        ],

        box_contents_title: "What's in the box".into(),
        box_contents_items: vec![
            box_item("b1", "Telzeal P600 tablet"),
            box_item("b2", "Charging cable"),
            box_item("b3", "User guide"),
        ],

        buy_now_headline: "Get the Telzeal P600 now".into(),
        buy_now_sub_headline: "Special price for a limited time!".into(),
        buy_now_cta_text: "Order now".into(),
        buy_now_footer_features: vec![
            "Free delivery".into(),
            "Two-year warranty".into(),
            "Easy returns and exchanges".into(),
        ],
    }
}

pub(super) fn blank_item(section: ItemSection) -> ContentItem {
    match section {
        ItemSection::Features => {
            ContentItem::Feature(feature(&fresh_id(), "New title", "Description here..."))
        }
        ItemSection::Reasons => {
            ContentItem::Reason(feature(&fresh_id(), "New title", "Description here..."))
        }
        ItemSection::Comparison => {
            ContentItem::ComparisonRow(row(&fresh_id(), "Feature", "Our value", "Their value"))
        }
        ItemSection::Faq => ContentItem::Faq(faq(&fresh_id(), "New question?", "Answer here")),
        ItemSection::BoxContents => ContentItem::BoxContent(box_item(&fresh_id(), "New item")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_stable() {
        assert_eq!(default_model(), default_model());
        let m = default_model();
        assert_eq!(m.features.len(), 2);
        assert_eq!(m.reasons.len(), 3);
        assert_eq!(m.faqs.len(), 5);
        assert_eq!(m.buy_now_footer_features.len(), 3);
    }
}
