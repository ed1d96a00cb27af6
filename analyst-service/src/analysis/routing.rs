use std::fmt;

use eco2mix_client::GridRecord;
use serde::Serialize;

use super::render;

/// What a query is about, as decided by the keyword router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nuclear,
    Wind,
    Solar,
    Renewables,
    Mix,
    Carbon,
    Consumption,
    Summary,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nuclear => "nuclear",
            Category::Wind => "wind",
            Category::Solar => "solar",
            Category::Renewables => "renewables",
            Category::Mix => "mix",
            Category::Carbon => "carbon",
            Category::Consumption => "consumption",
            Category::Summary => "summary",
        }
    }
}

/// A keyword predicate paired with the renderer it selects.
pub struct Route {
    pub category: Category,
    pub keywords: &'static [&'static str],
    pub render: fn(&GridRecord) -> String,
}

impl Route {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(*k))
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("category", &self.category)
            .field("keywords", &self.keywords)
            .finish()
    }
}

/// Evaluated top to bottom; the first matching route wins.
pub static ROUTES: &[Route] = &[
    Route {
        category: Category::Nuclear,
        keywords: &["nuclear"],
        render: render::nuclear_share,
    },
    Route {
        category: Category::Wind,
        keywords: &["wind"],
        render: render::wind_share,
    },
    Route {
        category: Category::Solar,
        keywords: &["solar"],
        render: render::solar_share,
    },
    Route {
        category: Category::Renewables,
        keywords: &["renewable", "green"],
        render: render::renewables_share,
    },
    Route {
        category: Category::Mix,
        keywords: &["mix"],
        render: render::energy_mix,
    },
    Route {
        category: Category::Carbon,
        keywords: &["carbon", "co2"],
        render: render::carbon_intensity,
    },
    Route {
        category: Category::Consumption,
        keywords: &["consumption"],
        render: render::consumption_balance,
    },
];

/// Used when no route matches.
pub static FALLBACK: Route = Route {
    category: Category::Summary,
    keywords: &[],
    render: render::summary,
};

pub fn select<'a>(routes: &'a [Route], query: &str) -> &'a Route {
    let lowered = query.to_lowercase();
    routes
        .iter()
        .find(|route| route.matches(&lowered))
        .unwrap_or(&FALLBACK)
}
