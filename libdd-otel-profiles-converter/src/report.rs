// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::dictionary::TableSizes;
use std::fmt::{Display, Formatter};

/// Where a profile sits in the batch: its resource, scope and container positions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ProfileSite {
    pub resource: usize,
    pub scope: usize,
    pub profile: usize,
}

impl Display for ProfileSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "resource_profiles[{}].scope_profiles[{}].profiles[{}]",
            self.resource, self.scope, self.profile
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReferenceKind {
    Mapping,
    Function,
    /// A sample's first location.
    Location,
    Link,
    /// One of a sample's attributes.
    SampleAttribute,
}

/// A reference that could not be carried over and was written as absent or zero instead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct UnresolvedReference {
    pub site: ProfileSite,
    pub kind: ReferenceKind,
    /// The position the profile referred to in its own table of `kind`.
    pub local_index: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConversionReport {
    /// Number of profiles converted.
    pub profiles: usize,
    pub dictionary: TableSizes,
    pub unresolved: Vec<UnresolvedReference>,
}

impl ConversionReport {
    pub(crate) fn record(&mut self, site: ProfileSite, kind: ReferenceKind, local_index: u64) {
        tracing::debug!(%site, ?kind, local_index, "Reference could not be resolved");
        self.unresolved.push(UnresolvedReference {
            site,
            kind,
            local_index,
        });
    }

    pub fn unresolved_count(&self, kind: ReferenceKind) -> usize {
        self.unresolved.iter().filter(|r| r.kind == kind).count()
    }

    pub fn is_lossless(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_display() {
        let site = ProfileSite {
            resource: 1,
            scope: 0,
            profile: 2,
        };
        assert_eq!(
            "resource_profiles[1].scope_profiles[0].profiles[2]",
            site.to_string()
        );
    }

    #[test]
    fn counts_by_kind() {
        let mut report = ConversionReport::default();
        assert!(report.is_lossless());

        let site = ProfileSite::default();
        report.record(site, ReferenceKind::Link, 4);
        report.record(site, ReferenceKind::Location, 0);
        report.record(site, ReferenceKind::Link, 5);

        assert!(!report.is_lossless());
        assert_eq!(2, report.unresolved_count(ReferenceKind::Link));
        assert_eq!(1, report.unresolved_count(ReferenceKind::Location));
        assert_eq!(0, report.unresolved_count(ReferenceKind::Mapping));
    }
}
