//! Fixed lookup vocabularies shared by training and inference.
//!
//! Both tables are sorted so membership is a binary search over a static
//! slice; nothing is allocated at runtime.

/// Cardinal and intercardinal directions, abbreviated and spelled out.
pub const DIRECTIONS: [&str; 16] = [
    "e", "east", "n", "ne", "north", "northeast", "northwest", "nw", "s", "se", "south",
    "southeast", "southwest", "sw", "w", "west",
];

/// USPS street suffixes and their common misspellings.
///
/// Exposed for callers that post-process parses; it is not part of the
/// emitted feature vocabulary.
pub const STREET_SUFFIXES: &[&str] = &[
    "allee", "alley", "ally", "aly", "anex", "annex", "annx", "anx", "arc", "arcade", "av", "ave",
    "aven", "avenu", "avenue", "avn", "avnue", "bayoo", "bayou", "bch", "beach", "bend", "bg",
    "bgs", "bl", "blf", "blfs", "bluf", "bluff", "bluffs", "blvd", "bnd", "bot", "bottm",
    "bottom", "boul", "boulevard", "boulv", "br", "branch", "brdge", "brg", "bridge", "brk",
    "brks", "brnch", "brook", "brooks", "btm", "burg", "burgs", "byp", "bypa", "bypas", "bypass",
    "byps", "byu", "camp", "canyn", "canyon", "cape", "causeway", "causwa", "causway", "cen",
    "cent", "center", "centers", "centr", "centre", "ci", "cir", "circ", "circl", "circle",
    "circles", "cirs", "ck", "clb", "clf", "clfs", "cliff", "cliffs", "club", "cmn", "cmns",
    "cmp", "cnter", "cntr", "cnyn", "common", "commons", "cor", "corner", "corners", "cors",
    "course", "court", "courts", "cove", "coves", "cp", "cpe", "cr", "crcl", "crcle", "crecent",
    "creek", "cres", "crescent", "cresent", "crest", "crk", "crossing", "crossroad", "crossroads",
    "crscnt", "crse", "crsent", "crsnt", "crssing", "crssng", "crst", "crt", "cswy", "ct", "ctr",
    "ctrs", "cts", "curv", "curve", "cv", "cvs", "cyn", "dale", "dam", "div", "divide", "dl",
    "dm", "dr", "driv", "drive", "drives", "drs", "drv", "dv", "dvd", "est", "estate", "estates",
    "ests", "ex", "exp", "expr", "express", "expressway", "expw", "expy", "ext", "extension",
    "extensions", "extn", "extnsn", "exts", "fall", "falls", "ferry", "field", "fields", "flat",
    "flats", "fld", "flds", "fls", "flt", "flts", "ford", "fords", "forest", "forests", "forg",
    "forge", "forges", "fork", "forks", "fort", "frd", "frds", "freeway", "freewy", "frg", "frgs",
    "frk", "frks", "frry", "frst", "frt", "frway", "frwy", "fry", "ft", "fwy", "garden",
    "gardens", "gardn", "gateway", "gatewy", "gatway", "gdn", "gdns", "glen", "glens", "gln",
    "glns", "grden", "grdn", "grdns", "green", "greens", "grn", "grns", "grov", "grove", "groves",
    "grv", "grvs", "gtway", "gtwy", "harb", "harbor", "harbors", "harbr", "haven", "havn", "hbr",
    "hbrs", "height", "heights", "hgts", "highway", "highwy", "hill", "hills", "hiway", "hiwy",
    "hl", "hllw", "hls", "hollow", "hollows", "holw", "holws", "hrbor", "ht", "hts", "hvn",
    "hway", "hwy", "inlet", "inlt", "is", "island", "islands", "isle", "isles", "islnd", "islnds",
    "iss", "jct", "jction", "jctn", "jctns", "jcts", "junction", "junctions", "junctn", "juncton",
    "key", "keys", "knl", "knls", "knol", "knoll", "knolls", "ky", "kys", "la", "lake", "lakes",
    "land", "landing", "lane", "lanes", "lck", "lcks", "ldg", "ldge", "lf", "lgt", "lgts",
    "light", "lights", "lk", "lks", "ln", "lndg", "lndng", "loaf", "lock", "locks", "lodg",
    "lodge", "loop", "loops", "lp", "mall", "manor", "manors", "mdw", "mdws", "meadow", "meadows",
    "medows", "mews", "mi", "mile", "mill", "mills", "mission", "missn", "ml", "mls", "mn", "mnr",
    "mnrs", "mnt", "mntain", "mntn", "mntns", "motorway", "mount", "mountain", "mountains",
    "mountin", "msn", "mssn", "mt", "mtin", "mtn", "mtns", "mtwy", "nck", "neck", "opas", "orch",
    "orchard", "orchrd", "oval", "overlook", "overpass", "ovl", "ovlk", "park", "parks",
    "parkway", "parkways", "parkwy", "pass", "passage", "path", "paths", "pike", "pikes", "pine",
    "pines", "pk", "pkway", "pkwy", "pkwys", "pky", "pl", "place", "plain", "plaines", "plains",
    "plaza", "pln", "plns", "plz", "plza", "pne", "pnes", "point", "points", "port", "ports",
    "pr", "prairie", "prarie", "prk", "prr", "prt", "prts", "psge", "pt", "pts", "pw", "pwy",
    "rad", "radial", "radiel", "radl", "ramp", "ranch", "ranches", "rapid", "rapids", "rd", "rdg",
    "rdge", "rdgs", "rds", "rest", "ri", "ridge", "ridges", "rise", "riv", "river", "rivr", "rn",
    "rnch", "rnchs", "road", "roads", "route", "row", "rpd", "rpds", "rst", "rte", "rue", "run",
    "rvr", "shl", "shls", "shoal", "shoals", "shoar", "shoars", "shore", "shores", "shr", "shrs",
    "skwy", "skyway", "smt", "spg", "spgs", "spng", "spngs", "spring", "springs", "sprng",
    "sprngs", "spur", "spurs", "sq", "sqr", "sqre", "sqrs", "sqs", "squ", "square", "squares",
    "st", "sta", "station", "statn", "stn", "str", "stra", "strav", "strave", "straven",
    "stravenue", "stravn", "stream", "street", "streets", "streme", "strm", "strt", "strvn",
    "strvnue", "sts", "sumit", "sumitt", "summit", "te", "ter", "terr", "terrace", "throughway",
    "tl", "tpk", "tpke", "tr", "trace", "traces", "track", "tracks", "trafficway", "trail",
    "trailer", "trails", "trak", "trce", "trfy", "trk", "trks", "trl", "trlr", "trlrs", "trls",
    "trnpk", "trpk", "trwy", "tunel", "tunl", "tunls", "tunnel", "tunnels", "tunnl", "turn",
    "turnpike", "turnpk", "un", "underpass", "union", "unions", "uns", "upas", "valley",
    "valleys", "vally", "vdct", "via", "viadct", "viaduct", "view", "views", "vill", "villag",
    "village", "villages", "ville", "villg", "villiage", "vis", "vist", "vista", "vl", "vlg",
    "vlgs", "vlly", "vly", "vlys", "vst", "vsta", "vw", "vws", "walk", "walks", "wall", "way",
    "ways", "well", "wells", "wl", "wls", "wy", "xc", "xg", "xing", "xrd", "xrds",
];

/// Whether an abbreviation-form token names a direction.
pub fn is_direction(abbrev: &str) -> bool {
    DIRECTIONS.binary_search(&abbrev).is_ok()
}

/// Whether an abbreviation-form token is a known street suffix.
pub fn is_street_suffix(abbrev: &str) -> bool {
    STREET_SUFFIXES.binary_search(&abbrev).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(DIRECTIONS.windows(2).all(|w| w[0] < w[1]));
        assert!(STREET_SUFFIXES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_directions() {
        for dir in ["n", "s", "e", "w", "ne", "nw", "se", "sw"] {
            assert!(is_direction(dir), "{dir} should be a direction");
        }
        assert!(is_direction("northeast"));
        assert!(is_direction("southwest"));
        assert!(!is_direction("N"));
        assert!(!is_direction("nne"));
        assert!(!is_direction(""));
    }

    #[test]
    fn test_directions_contain_no_digits() {
        assert!(
            DIRECTIONS
                .iter()
                .all(|d| !d.chars().any(|c| c.is_ascii_digit()))
        );
    }

    #[test]
    fn test_street_suffixes() {
        assert_eq!(STREET_SUFFIXES.len(), 588);
        assert!(is_street_suffix("st"));
        assert!(is_street_suffix("blvd"));
        assert!(is_street_suffix("xrds"));
        assert!(!is_street_suffix("main"));
    }
}
