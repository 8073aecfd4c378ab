use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Marker that selects every resource.
pub const ALL_RESOURCES: &str = "All";

/// A sub-resource that can be fetched for a profit center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resource {
    Header,
    CompanyCodeAssignment,
    ProfitCenterName,
}

impl Resource {
    pub const ALL: [Resource; 3] = [
        Resource::Header,
        Resource::CompanyCodeAssignment,
        Resource::ProfitCenterName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Header => "Header",
            Resource::CompanyCodeAssignment => "CompanyCodeAssignment",
            Resource::ProfitCenterName => "ProfitCenterName",
        }
    }

    /// The OData entity set this resource is read from.
    pub fn entity_set(&self) -> &'static str {
        match self {
            Resource::Header => "A_ProfitCenter",
            Resource::CompanyCodeAssignment => "A_PrftCtrCompanyCodeAssignment",
            Resource::ProfitCenterName => "A_ProfitCenterText",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// The resources a single run should fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedResourceSet {
    resources: BTreeSet<Resource>,
}

impl RequestedResourceSet {
    /// Every known resource.
    pub fn all() -> Self {
        Resource::ALL.into_iter().collect()
    }

    /// Builds the set from resource names as they appear in an input file.
    ///
    /// An empty list, or one containing [`ALL_RESOURCES`], selects everything.
    /// Unknown names are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        if names.is_empty() || names.iter().any(|n| n.as_ref() == ALL_RESOURCES) {
            return Self::all();
        }

        names
            .iter()
            .filter_map(|name| match name.as_ref().parse::<Resource>() {
                Ok(resource) => Some(resource),
                Err(e) => {
                    debug!(error = %e, "Ignoring requested resource");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, resource: Resource) -> bool {
        self.resources.contains(&resource)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Resource> + '_ {
        self.resources.iter().copied()
    }
}

impl FromIterator<Resource> for RequestedResourceSet {
    fn from_iter<T: IntoIterator<Item = Resource>>(iter: T) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_selects_everything() {
        let set = RequestedResourceSet::from_names(Vec::<String>::new());
        assert_eq!(set, RequestedResourceSet::all());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn all_marker_anywhere_selects_everything() {
        assert_eq!(
            RequestedResourceSet::from_names(["All"]),
            RequestedResourceSet::all()
        );
        assert_eq!(
            RequestedResourceSet::from_names(["Header", "All"]),
            RequestedResourceSet::all()
        );
    }

    #[test]
    fn unknown_names_are_dropped() {
        let set = RequestedResourceSet::from_names(["Header", "Bogus", "header"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Resource::Header]);

        let none = RequestedResourceSet::from_names(["Bogus"]);
        assert!(none.is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let set = RequestedResourceSet::from_names(["ProfitCenterName", "ProfitCenterName"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Resource::ProfitCenterName));
    }

    #[test]
    fn resources_map_to_entity_sets() {
        assert_eq!(Resource::Header.entity_set(), "A_ProfitCenter");
        assert_eq!(
            Resource::CompanyCodeAssignment.entity_set(),
            "A_PrftCtrCompanyCodeAssignment"
        );
        assert_eq!(Resource::ProfitCenterName.entity_set(), "A_ProfitCenterText");
        assert_eq!("CompanyCodeAssignment".parse(), Ok(Resource::CompanyCodeAssignment));
    }
}
