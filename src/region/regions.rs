use once_cell::sync::Lazy;

// Declaration order is the scan order for every lookup in the resolver.
// Keep a state's aliases together and append new states at the end, or
// substring matches will start resolving differently.
pub static ALIAS_REGION_MAP: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("tamil nadu", "Tamil Nadu"),
        ("tamilnadu", "Tamil Nadu"),
        ("tn", "Tamil Nadu"),
        ("uttar pradesh", "Uttar Pradesh"),
        ("up", "Uttar Pradesh"),
        ("west bengal", "West Bengal"),
        ("wb", "West Bengal"),
        ("bengal", "West Bengal"),
        ("maharashtra", "Maharashtra"),
        ("maharastra", "Maharashtra"),
        ("karnataka", "Karnataka"),
        ("karnatka", "Karnataka"),
        ("kerala", "Kerala"),
        ("keral", "Kerala"),
        ("gujarat", "Gujarat"),
        ("gujrat", "Gujarat"),
        ("rajasthan", "Rajasthan"),
        ("rajastan", "Rajasthan"),
        ("madhya pradesh", "Madhya Pradesh"),
        ("mp", "Madhya Pradesh"),
        ("andhra pradesh", "Andhra Pradesh"),
        ("ap", "Andhra Pradesh"),
        ("telangana", "Telangana"),
        ("tg", "Telangana"),
        ("odisha", "Odisha"),
        ("orissa", "Odisha"),
        ("punjab", "Punjab"),
        ("haryana", "Haryana"),
        ("bihar", "Bihar"),
        ("assam", "Assam"),
        ("jharkhand", "Jharkhand"),
        ("chhattisgarh", "Chhattisgarh"),
        ("chhatisgarh", "Chhattisgarh"),
        ("himachal pradesh", "Himachal Pradesh"),
        ("himachal", "Himachal Pradesh"),
        ("hp", "Himachal Pradesh"),
        ("uttarakhand", "Uttarakhand"),
        ("uttaranchal", "Uttarakhand"),
        ("goa", "Goa"),
        ("delhi", "Delhi"),
        ("nct", "Delhi"),
        ("new delhi", "Delhi"),
        ("jammu and kashmir", "Jammu and Kashmir"),
        ("j&k", "Jammu and Kashmir"),
        ("jammu kashmir", "Jammu and Kashmir"),
        ("ladakh", "Ladakh"),
        ("manipur", "Manipur"),
        ("meghalaya", "Meghalaya"),
        ("mizoram", "Mizoram"),
        ("nagaland", "Nagaland"),
        ("sikkim", "Sikkim"),
        ("tripura", "Tripura"),
        ("arunachal pradesh", "Arunachal Pradesh"),
        ("arunachal", "Arunachal Pradesh"),
        ("puducherry", "Puducherry"),
        ("pondicherry", "Puducherry"),
        ("chandigarh", "Chandigarh"),
        ("dadra and nagar haveli", "Dadra and Nagar Haveli"),
        ("dnh", "Dadra and Nagar Haveli"),
        ("daman and diu", "Daman and Diu"),
        ("dd", "Daman and Diu"),
        ("lakshadweep", "Lakshadweep"),
        ("andaman and nicobar islands", "Andaman and Nicobar Islands"),
        ("a&n", "Andaman and Nicobar Islands"),
    ]
});

// Spoken-language fallback signals. "hindi" maps to one state even though
// Hindi is spoken across many; Uttar Pradesh is the default approximation.
pub static LANGUAGE_REGION_MAP: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("tamil", "Tamil Nadu"),
        ("telugu", "Andhra Pradesh"),
        ("kannada", "Karnataka"),
        ("malayalam", "Kerala"),
        ("marathi", "Maharashtra"),
        ("gujarati", "Gujarat"),
        ("bengali", "West Bengal"),
        ("punjabi", "Punjab"),
        ("hindi", "Uttar Pradesh"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alias_keys_are_unique() {
        let mut seen = HashSet::new();
        for &(alias, _) in ALIAS_REGION_MAP.iter() {
            assert!(seen.insert(alias), "duplicate alias: {}", alias);
        }
    }

    #[test]
    fn alias_keys_are_lowercase_and_trimmed() {
        for &(alias, _) in ALIAS_REGION_MAP.iter() {
            assert_eq!(alias, alias.trim());
            assert_eq!(alias, alias.to_lowercase());
        }
    }

    #[test]
    fn language_hints_target_known_regions() {
        let regions: HashSet<&str> = ALIAS_REGION_MAP.iter().map(|&(_, region)| region).collect();
        for &(keyword, region) in LANGUAGE_REGION_MAP.iter() {
            assert!(
                regions.contains(region),
                "{} points at unknown region {}",
                keyword,
                region
            );
        }
    }

    #[test]
    fn every_canonical_name_is_its_own_alias() {
        for &(_, region) in ALIAS_REGION_MAP.iter() {
            let lowered = region.to_lowercase();
            assert!(
                ALIAS_REGION_MAP.iter().any(|&(alias, _)| alias == lowered),
                "missing self-alias for {}",
                region
            );
        }
    }
}
