use roxmltree::Node;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Removes a literal `<![CDATA[ ... ]]>` wrapper and trims. Empty results are `None`.
pub fn clean_cdata(text: &str) -> Option<String> {
    let unwrapped = text.trim_start().strip_prefix(CDATA_OPEN).unwrap_or(text);
    let unwrapped = unwrapped
        .trim_end()
        .strip_suffix(CDATA_CLOSE)
        .unwrap_or(unwrapped);

    let cleaned = unwrapped.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Concatenated text of every text node below `node`, in document order.
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// First element below `node` (at any depth) named `tag`.
pub fn first_named<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

/// Every element below `node` (at any depth) named `tag`, in document order.
pub fn all_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

/// Follows `path` one first-descendant lookup at a time and returns the cleaned text.
pub fn lookup(node: Node, path: &[&str]) -> Option<String> {
    let mut current = node;
    for tag in path {
        current = first_named(current, tag)?;
    }
    clean_cdata(&text_content(current))
}

/// Leading-prefix float parse: `"85.5 €"` is 85.5, anything without a numeric prefix is NaN.
pub fn parse_float_prefix(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return f64::NAN;
    };
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut sign = 1.0;

    if let Some(b) = bytes.first().filter(|b| matches!(b, b'+' | b'-')) {
        if *b == b'-' {
            sign = -1.0;
        }
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Flat text fields of an entry and where they live in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Id,
    DealerId,
    Brand,
    Model,
    Version,
    Fuel,
    Transmission,
    Seats,
    Doors,
    Color,
    Power,
    Kilometers,
    Estado,
    Disponible,
    Emissions,
    EmissionsBadge,
    FuelConsumptionCombined,
    BodyType,
    PromotionFlag,
}

impl ScalarField {
    pub const ALL: [ScalarField; 19] = [
        ScalarField::Id,
        ScalarField::DealerId,
        ScalarField::Brand,
        ScalarField::Model,
        ScalarField::Version,
        ScalarField::Fuel,
        ScalarField::Transmission,
        ScalarField::Seats,
        ScalarField::Doors,
        ScalarField::Color,
        ScalarField::Power,
        ScalarField::Kilometers,
        ScalarField::Estado,
        ScalarField::Disponible,
        ScalarField::Emissions,
        ScalarField::EmissionsBadge,
        ScalarField::FuelConsumptionCombined,
        ScalarField::BodyType,
        ScalarField::PromotionFlag,
    ];

    pub fn path(self) -> &'static [&'static str] {
        match self {
            ScalarField::Id => &["motorflashID"],
            ScalarField::DealerId => &["dealerID"],
            ScalarField::Brand => &["marca"],
            ScalarField::Model => &["modelo"],
            ScalarField::Version => &["version"],
            ScalarField::Fuel => &["combustible"],
            ScalarField::Transmission => &["cambio"],
            ScalarField::Seats => &["plazas"],
            ScalarField::Doors => &["puertas"],
            ScalarField::Color => &["color"],
            ScalarField::Power => &["potencia"],
            ScalarField::Kilometers => &["kilometros"],
            ScalarField::Estado => &["estado"],
            ScalarField::Disponible => &["disponible"],
            ScalarField::Emissions => &["emisiones"],
            ScalarField::EmissionsBadge => &["distintivo"],
            ScalarField::FuelConsumptionCombined => &["consumo", "mixto"],
            ScalarField::BodyType => &["carroceria"],
            ScalarField::PromotionFlag => &["vehiculo_en_promocion"],
        }
    }
}

/// A container node holding repeated item nodes, e.g. `fotos/foto`.
#[derive(Debug, Clone, Copy)]
pub struct RepeatedRule {
    pub container: &'static str,
    pub item: &'static str,
}

pub const OFFERS: RepeatedRule = RepeatedRule {
    container: "renting",
    item: "ofertaRenting",
};

pub const PHOTOS: RepeatedRule = RepeatedRule {
    container: "fotos",
    item: "foto",
};

pub const OFFER_PRICE: &str = "cuota";
pub const OFFER_MONTHS: &str = "meses";
pub const OFFER_KM: &str = "km";

pub const PROMOTION_MARKER: &str = "SI";

/// Typed view over one entry node.
#[derive(Debug, Clone, Copy)]
pub struct EntryNode<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> EntryNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    pub fn scalar(&self, field: ScalarField) -> Option<String> {
        lookup(self.node, field.path())
    }

    pub fn child_text(&self, tag: &str) -> Option<String> {
        lookup(self.node, &[tag])
    }

    /// Items of a repeated rule; empty when the container is absent.
    pub fn items(&self, rule: RepeatedRule) -> Vec<Node<'a, 'input>> {
        match first_named(self.node, rule.container) {
            Some(container) => all_named(container, rule.item).collect(),
            None => Vec::new(),
        }
    }
}
