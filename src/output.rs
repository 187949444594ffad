use crate::prelude::*;

/// One column of the human-readable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    PricePer,
    Url,
    Store,
}

/// Parses a field arrangement like "p n s" (n=name, p=price, e=price per
/// kg/l/etc, u=url, s=store). Any unknown token rejects the whole
/// arrangement; at least one field is required.
pub fn parse_format(format: &str) -> Option<Vec<Field>> {
    format.split(' ').map(|token| match token {
        "n" => Some(Field::Name),
        "p" => Some(Field::Price),
        "e" => Some(Field::PricePer),
        "u" => Some(Field::Url),
        "s" => Some(Field::Store),
        _ => None,
    }).collect()
}

fn push_row(out: &mut String, fields: &[Field], name: &str, price: &str, price_per: &str, url: &str, store: &str) {
    for field in fields {
        match field {
            Field::Name => out.push_str(&format!("{name:<50}")),
            Field::Price => out.push_str(&format!("{price:<10}")),
            Field::PricePer => out.push_str(&format!("{price_per:<20}")),
            Field::Url => out.push_str(&format!("{url:<150}")),
            Field::Store => out.push_str(&format!("{store:<10}")),
        }
    }
    out.push('\n');
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders the result lists as aligned-column text, one section per group.
pub fn render_human(results: &[(String, Vec<Product>)], fields: &[Field]) -> String {
    let mut out = String::new();
    for (label, products) in results {
        out.push_str(&format!("\n# Keyword: {label}\n"));
        push_row(&mut out, fields, "Name", "Price", "Price per kg/l/etc", "URL", "Store");
        for product in products {
            let mut name = product.name.clone();
            if name.chars().count() > 50 {
                name = name.chars().take(47).collect::<String>() + "...";
            }
            let price = product.price.to_string();
            let price_per = match product.price_per {
                Some(price_per) => price_per.to_string(),
                None => String::from("N/A"),
            };
            push_row(&mut out, fields, &name, &price, &price_per, &product.url, &capitalize(&product.store));
        }
    }
    out
}

/// Renders the result lists as one JSON object, group labels as keys, in
/// group order.
pub fn render_json(results: &[(String, Vec<Product>)]) -> String {
    let mut map = serde_json::Map::new();
    for (label, products) in results {
        map.insert(label.clone(), serde_json::to_value(products).unwrap_or_default());
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(map)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price_per: Option<f64>) -> Product {
        Product {
            name: name.to_string(),
            price: 1.05,
            price_per,
            url: String::from("https://www.rimi.ee/epood/ee/tooted/piim/p/101"),
            store: String::from("rimi"),
        }
    }

    #[test]
    fn format_parsing() {
        assert_eq!(parse_format("s n p e"), Some(vec![Field::Store, Field::Name, Field::Price, Field::PricePer]));
        assert_eq!(parse_format("u"), Some(vec![Field::Url]));
        assert_eq!(parse_format(""), None);
        assert_eq!(parse_format("n x"), None);
        assert_eq!(parse_format("np"), None);
    }

    #[test]
    fn human_output() {
        let results = vec![(String::from("piim"), vec![product("Alma täispiim", Some(1.05)), product("Kohupiim", None)])];
        let out = render_human(&results, &parse_format("s n p e").unwrap());

        assert!(out.contains("# Keyword: piim"));
        assert!(out.contains("Name"));
        assert!(out.contains("Rimi      Alma täispiim"));
        assert!(out.contains("N/A"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "Pika nimega piimatoode, mille nimi on tõesti väga väga pikk";
        let results = vec![(String::from("piim"), vec![product(long, None)])];
        let out = render_human(&results, &parse_format("n").unwrap());

        assert!(!out.contains(long));
        let truncated = long.chars().take(47).collect::<String>() + "...";
        assert!(out.contains(&truncated));
    }

    #[test]
    fn json_output_keeps_group_order() {
        let results = vec![
            (String::from("vorst"), vec![product("Rakvere viiner", None)]),
            (String::from("piim"), vec![]),
        ];
        let out = render_json(&results);

        assert!(out.find("\"vorst\"").unwrap() < out.find("\"piim\"").unwrap());
        assert!(out.contains("Rakvere viiner"));
    }
}
