//! The GRI disclosure catalog.
//!
//! A fixed, ordered table of standards and their disclosure codes. Order is
//! significant: result records are always emitted in catalog order. The two
//! "GRI 306" revisions are distinct entries and may repeat code strings.

/// A single disclosure item within a standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    pub code: &'static str,
    pub description: &'static str,
}

/// A GRI standard keyed by its full name (e.g. "GRI 305: Emissions 2016").
#[derive(Debug, Clone, Copy)]
pub struct Standard {
    pub name: &'static str,
    pub disclosures: &'static [Disclosure],
}

/// Immutable, process-wide disclosure catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    standards: &'static [Standard],
}

impl Catalog {
    pub const fn new(standards: &'static [Standard]) -> Self {
        Self { standards }
    }

    pub fn standards(&self) -> &'static [Standard] {
        self.standards
    }

    /// Every (standard, disclosure) pair in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Standard, &'static Disclosure)> + '_ {
        self.standards
            .iter()
            .flat_map(|s| s.disclosures.iter().map(move |d| (s, d)))
    }

    /// Total number of disclosure entries (duplicated code strings counted per standard).
    pub fn len(&self) -> usize {
        self.standards.iter().map(|s| s.disclosures.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a standard by exact name.
    pub fn standard(&self, name: &str) -> Option<&'static Standard> {
        self.standards.iter().find(|s| s.name == name)
    }
}

const fn d(code: &'static str, description: &'static str) -> Disclosure {
    Disclosure { code, description }
}

/// The built-in GRI catalog.
pub static GRI_CATALOG: Catalog = Catalog::new(GRI_STANDARDS);

const GRI_STANDARDS: &[Standard] = &[
    Standard {
        name: "GRI 2: General Disclosures 2021",
        disclosures: &[
            d("2-1", "Organizational details"),
            d("2-2", "Entities included in the organization’s sustainability reporting"),
            d("2-3", "Reporting period, frequency and contact point"),
            d("2-4", "Restatements of information"),
            d("2-5", "External assurance"),
            d("2-6", "Activities, value chain and other business relationships"),
            d("2-7", "Employees"),
            d("2-8", "Workers who are not employees"),
            d("2-9", "Governance structure and composition"),
            d("2-10", "Nomination and selection of the highest governance body"),
            d("2-11", "Chair of the highest governance body"),
            d("2-12", "Role of the highest governance body in overseeing the management of impacts"),
            d("2-13", "Delegating authority for managing impacts"),
            d("2-14", "Role of the highest governance body in sustainability reporting"),
            d("2-15", "Conflicts of interest"),
            d("2-16", "Communication of critical concerns"),
            d("2-17", "Collective knowledge of the highest governance body"),
            d("2-18", "Evaluation of the performance of the highest governance body"),
            d("2-19", "Remuneration policies"),
            d("2-20", "Process to determine remuneration"),
            d("2-21", "Annual total compensation ratio"),
            d("2-22", "Statement on sustainable development strategy"),
            d("2-23", "Policy commitments"),
            d("2-24", "Embedding policy commitments"),
            d("2-25", "Processes to remediate negative impacts"),
            d("2-26", "Mechanisms for seeking advice and raising concerns"),
            d("2-27", "Compliance with laws and regulations"),
            d("2-28", "Membership associations"),
            d("2-29", "Approach to stakeholder engagement"),
            d("2-30", "Collective bargaining agreements"),
        ],
    },
    Standard {
        name: "GRI 3: Material Topics 2021",
        disclosures: &[
            d("3-1", "Process to determine material topics"),
            d("3-2", "List of material topics"),
            d("3-3", "Management of material topics"),
        ],
    },
    Standard {
        name: "GRI 101: Biodiversity 2024",
        disclosures: &[
            d("101-1", "Policies to halt and reverse biodiversity loss"),
            d("101-2", "Management of biodiversity impacts"),
            d("101-3", "Access and benefit-sharing"),
            d("101-4", "Identification of biodiversity impacts"),
            d("101-5", "Locations with biodiversity impacts"),
            d("101-6", "Direct drivers of biodiversity loss"),
            d("101-7", "Changes to the state of biodiversity"),
            d("101-8", "Ecosystem services"),
        ],
    },
    Standard {
        name: "GRI 201: Economic Performance 2016",
        disclosures: &[
            d("201-1", "Direct economic value generated and distributed"),
            d("201-2", "Financial implications and other risks and opportunities due to climate change"),
            d("201-3", "Defined benefit plan obligations and other retirement plans"),
            d("201-4", "Financial assistance received from government"),
        ],
    },
    Standard {
        name: "GRI 202: Market Presence 2016",
        disclosures: &[
            d("202-1", "Ratios of standard entry level wage by gender compared to local minimum wage"),
            d("202-2", "Proportion of senior management hired from the local community"),
        ],
    },
    Standard {
        name: "GRI 203: Indirect Economic Impacts 2016",
        disclosures: &[
            d("203-1", "Infrastructure investments and services supported"),
            d("203-2", "Significant indirect economic impacts"),
        ],
    },
    Standard {
        name: "GRI 204: Procurement Practices 2016",
        disclosures: &[
            d("204-1", "Proportion of spending on local suppliers"),
        ],
    },
    Standard {
        name: "GRI 205: Anti-Corruption 2016",
        disclosures: &[
            d("205-1", "Operations assessed for risks related to corruption"),
            d("205-2", "Communication and training about anti-corruption policies and procedures"),
            d("205-3", "Confirmed incidents of corruption and actions taken"),
        ],
    },
    Standard {
        name: "GRI 206: Anti-Competitive Behavior 2016",
        disclosures: &[
            d("206-1", "Legal actions for anti-competitive behavior, anti-trust, and monopoly practices"),
        ],
    },
    Standard {
        name: "GRI 207: Tax 2019",
        disclosures: &[
            d("207-1", "Approach to tax"),
            d("207-2", "Tax governance, control, and risk management"),
            d("207-3", "Stakeholder engagement and management of concerns related to tax"),
            d("207-4", "Country-by-country reporting"),
        ],
    },
    Standard {
        name: "GRI 301: Materials 2016",
        disclosures: &[
            d("301-1", "Materials used by weight or volume"),
            d("301-2", "Recycled input materials used"),
            d("301-3", "Reclaimed products and their packaging materials"),
        ],
    },
    Standard {
        name: "GRI 302: Energy 2016",
        disclosures: &[
            d("302-1", "Energy consumption within the organization"),
            d("302-2", "Energy consumption outside of the organization"),
            d("302-3", "Energy intensity"),
            d("302-4", "Reduction of energy consumption"),
            d("302-5", "Reduction in energy requirements of products and services"),
        ],
    },
    Standard {
        name: "GRI 303: Water and Effluents 2018",
        disclosures: &[
            d("303-1", "Interactions with water as a shared resource"),
            d("303-2", "Management of water discharge-related impacts"),
            d("303-3", "Water withdrawal"),
            d("303-4", "Water discharge"),
            d("303-5", "Water consumption"),
        ],
    },
    Standard {
        name: "GRI 304: Biodiversity 2016",
        disclosures: &[
            d("304-1", "Operational sites owned, leased, managed in, or adjacent to, protected areas and areas of high biodiversity value outside protected areas"),
            d("304-2", "Significant impacts of activities, products, and services on biodiversity"),
            d("304-3", "Habitat protection and restoration"),
            d("304-4", "IUCN Red List species and national conservation list species with habitats in areas affected by operations"),
        ],
    },
    Standard {
        name: "GRI 305: Emissions 2016",
        disclosures: &[
            d("305-1", "Direct (Scope 1) GHG emissions"),
            d("305-2", "Energy indirect (Scope 2) GHG emissions"),
            d("305-3", "Other indirect (Scope 3) GHG emissions"),
            d("305-4", "GHG emissions intensity"),
            d("305-5", "Reduction of GHG emissions"),
            d("305-6", "Emissions of ozone-depleting substances (ODS)"),
            d("305-7", "Nitrogen oxides (NOX), sulfur oxides (SOX), and other significant air emissions"),
        ],
    },
    Standard {
        name: "GRI 306: Effluents and Waste 2016",
        disclosures: &[
            d("306-3", "Significant spills"),
        ],
    },
    Standard {
        name: "GRI 306: Waste 2020",
        disclosures: &[
            d("306-1", "Waste generation and significant waste-related impacts"),
            d("306-2", "Management of significant waste-related impacts"),
            d("306-3", "Waste generated"),
            d("306-4", "Waste diverted from disposal"),
            d("306-5", "Waste directed to disposal"),
        ],
    },
    Standard {
        name: "GRI 308: Supplier Environmental Assessment 2016",
        disclosures: &[
            d("308-1", "New suppliers that were screened using environmental criteria"),
            d("308-2", "Negative environmental impacts in the supply chain and actions taken"),
        ],
    },
    Standard {
        name: "GRI 401: Employment 2016",
        disclosures: &[
            d("401-1", "New employee hires and employee turnover"),
            d("401-2", "Benefits provided to full-time employees that are not provided to temporary or part-time employees"),
            d("401-3", "Parental leave"),
        ],
    },
    Standard {
        name: "GRI 402: Labor/Management Relations 2016",
        disclosures: &[
            d("402-1", "Minimum notice periods regarding operational changes"),
        ],
    },
    Standard {
        name: "GRI 403: Occupational Health and Safety 2018",
        disclosures: &[
            d("403-1", "Occupational health and safety management system"),
            d("403-2", "Hazard identification, risk assessment, and incident investigation"),
            d("403-3", "Occupational health services"),
            d("403-4", "Worker participation, consultation, and communication"),
            d("403-5", "Worker training on occupational health and safety"),
            d("403-6", "Promotion of worker health"),
            d("403-7", "Prevention and mitigation of occupational health and safety impacts directly linked by business relationships"),
            d("403-8", "Workers covered by an occupational health and safety management system"),
            d("403-9", "Work-related injuries"),
            d("403-10", "Work-related ill health"),
        ],
    },
    Standard {
        name: "GRI 404: Training and Education 2016",
        disclosures: &[
            d("404-1", "Average hours of training per year per employee"),
            d("404-2", "Programs for upgrading employee skills and transition assistance programs"),
            d("404-3", "Percentage of employees receiving regular performance and career development reviews"),
        ],
    },
    Standard {
        name: "GRI 405: Diversity and Equal Opportunity 2016",
        disclosures: &[
            d("405-1", "Diversity of governance bodies and employees"),
            d("405-2", "Ratio of basic salary and remuneration of women to men"),
            d("405-3", "Parental leave"),
        ],
    },
    Standard {
        name: "GRI 406: Non-discrimination 2016",
        disclosures: &[
            d("406-1", "Incidents of discrimination and corrective actions taken"),
        ],
    },
    Standard {
        name: "GRI 407: Freedom of Association and Collective Bargaining 2016",
        disclosures: &[
            d("407-1", "Operations and suppliers in which the right to freedom of association and collective bargaining may be at risk"),
        ],
    },
    Standard {
        name: "GRI 408: Child Labor 2016",
        disclosures: &[
            d("408-1", "Operations and suppliers at significant risk for incidents of child labor"),
        ],
    },
    Standard {
        name: "GRI 409: Forced or Compulsory Labor 2016",
        disclosures: &[
            d("409-1", "Operations and suppliers at significant risk for incidents of forced or compulsory labor"),
        ],
    },
    Standard {
        name: "GRI 410: Security Practices 2016",
        disclosures: &[
            d("410-1", "Security personnel trained in human rights policies or procedures"),
        ],
    },
    Standard {
        name: "GRI 411: Rights of Indigenous Peoples 2016",
        disclosures: &[
            d("411-1", "Operations and suppliers in which the rights of indigenous peoples may be at risk"),
        ],
    },
    Standard {
        name: "GRI 412: Human Rights Assessment 2016",
        disclosures: &[
            d("412-1", "Operations that have been subject to human rights reviews or impact assessments"),
            d("412-2", "Employee training on human rights policies or procedures"),
            d("412-3", "Significant investment agreements and contracts that include human rights clauses or that underwent human rights screening"),
        ],
    },
    Standard {
        name: "GRI 413: Local Communities 2016",
        disclosures: &[
            d("413-1", "Operations with local community engagement, impact assessments, and development programs"),
            d("413-2", "Operations with significant actual and potential negative impacts on local communities"),
        ],
    },
    Standard {
        name: "GRI 414: Supplier Social Assessment 2016",
        disclosures: &[
            d("414-1", "New suppliers that were screened using social criteria"),
            d("414-2", "Negative social impacts in the supply chain and actions taken"),
        ],
    },
    Standard {
        name: "GRI 415: Public Policy 2016",
        disclosures: &[
            d("415-1", "Political contributions"),
        ],
    },
    Standard {
        name: "GRI 416: Customer Health and Safety 2016",
        disclosures: &[
            d("416-1", "Assessment of the health and safety impacts of product and service categories"),
            d("416-2", "Incidents of non-compliance concerning the health and safety impacts of products and services"),
        ],
    },
    Standard {
        name: "GRI 417: Marketing and Labeling 2016",
        disclosures: &[
            d("417-1", "Requirements for product and service information and labeling"),
            d("417-2", "Incidents of non-compliance concerning product and service information and labeling"),
            d("417-3", "Incidents of non-compliance concerning marketing communications"),
        ],
    },
    Standard {
        name: "GRI 418: Customer Privacy 2016",
        disclosures: &[
            d("418-1", "Substantiated complaints concerning breaches of customer privacy and losses of customer data"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(GRI_CATALOG.standards().len(), 36);
        assert_eq!(GRI_CATALOG.len(), 130);
        assert_eq!(GRI_CATALOG.iter().count(), GRI_CATALOG.len());
    }

    #[test]
    fn test_codes_unique_within_standard() {
        for standard in GRI_CATALOG.standards() {
            let mut seen = HashSet::new();
            for disclosure in standard.disclosures {
                assert!(
                    seen.insert(disclosure.code),
                    "duplicate {} in {}",
                    disclosure.code,
                    standard.name
                );
            }
        }
    }

    #[test]
    fn test_both_306_revisions_present() {
        let old = GRI_CATALOG.standard("GRI 306: Effluents and Waste 2016").unwrap();
        let new = GRI_CATALOG.standard("GRI 306: Waste 2020").unwrap();
        let old_306_3 = old.disclosures.iter().find(|d| d.code == "306-3").unwrap();
        let new_306_3 = new.disclosures.iter().find(|d| d.code == "306-3").unwrap();
        assert_eq!(old_306_3.description, "Significant spills");
        assert_eq!(new_306_3.description, "Waste generated");
    }

    #[test]
    fn test_definition_order() {
        let (first_std, first) = GRI_CATALOG.iter().next().unwrap();
        assert_eq!(first_std.name, "GRI 2: General Disclosures 2021");
        assert_eq!(first.code, "2-1");
        let (last_std, last) = GRI_CATALOG.iter().last().unwrap();
        assert_eq!(last_std.name, "GRI 418: Customer Privacy 2016");
        assert_eq!(last.code, "418-1");
    }
}
