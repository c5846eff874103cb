use super::{Filter, OrderBy};

/// Filter, order and paging directives for a query, plus additional
/// `select`/`expand` entries by logical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryDirectives {
    pub top: Option<u64>,
    pub skip: Option<u64>,
    pub filter: Vec<Filter>,
    pub order_by: Vec<OrderBy>,
    pub select: Vec<String>,
    pub expand: Vec<String>,
}

impl QueryDirectives {
    /// Merges caller-supplied directives into `self`.
    ///
    /// `top` and `skip` from `other` overwrite the current values when set.
    /// Every list is concatenated, skipping entries already present.
    pub fn merge(&mut self, other: QueryDirectives) {
        if other.top.is_some() {
            self.top = other.top;
        }

        if other.skip.is_some() {
            self.skip = other.skip;
        }

        extend_unique(&mut self.filter, other.filter);
        extend_unique(&mut self.order_by, other.order_by);
        extend_unique(&mut self.select, other.select);
        extend_unique(&mut self.expand, other.expand);
    }

    /// True when the primary request would be filtered, sorted or paged.
    pub fn shapes_primary(&self) -> bool {
        self.top.is_some()
            || self.skip.is_some()
            || !self.filter.is_empty()
            || !self.order_by.is_empty()
    }
}

fn extend_unique<T: PartialEq>(dst: &mut Vec<T>, src: Vec<T>) {
    for item in src {
        if !dst.contains(&item) {
            dst.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paging_overwrites() {
        let mut base = QueryDirectives {
            top: Some(100),
            skip: Some(1),
            ..Default::default()
        };

        base.merge(QueryDirectives {
            top: Some(10),
            ..Default::default()
        });

        assert_eq!(base.top, Some(10));
        assert_eq!(base.skip, Some(1));
    }

    #[test]
    fn lists_concatenate_without_duplicates() {
        let mut base = QueryDirectives {
            filter: vec![Filter::eq("Title", "Documents")],
            order_by: vec![OrderBy::asc("Title")],
            select: vec!["Title".to_string()],
            ..Default::default()
        };

        base.merge(QueryDirectives {
            filter: vec![Filter::eq("Title", "Documents"), Filter::gt("ItemCount", 0)],
            order_by: vec![OrderBy::asc("Title"), OrderBy::desc("Created")],
            select: vec!["Title".to_string(), "Description".to_string()],
            expand: vec!["Fields".to_string()],
            ..Default::default()
        });

        assert_eq!(
            base.filter,
            vec![Filter::eq("Title", "Documents"), Filter::gt("ItemCount", 0)]
        );
        assert_eq!(
            base.order_by,
            vec![OrderBy::asc("Title"), OrderBy::desc("Created")]
        );
        assert_eq!(base.select, ["Title", "Description"]);
        assert_eq!(base.expand, ["Fields"]);
    }

    #[test]
    fn shapes_primary() {
        assert!(!QueryDirectives::default().shapes_primary());
        assert!(QueryDirectives {
            skip: Some(5),
            ..Default::default()
        }
        .shapes_primary());
        assert!(!QueryDirectives {
            select: vec!["Title".to_string()],
            ..Default::default()
        }
        .shapes_primary());
    }
}
