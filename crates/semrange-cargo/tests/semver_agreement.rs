//! Cross-checks the Cargo grammar against the `semver` crate used by Cargo
//! itself, on release versions.

use semrange_cargo::parse_requirement;
use semrange_core::Version;

fn release_grid() -> impl Iterator<Item = (u64, u64, u64)> {
    (0..4).flat_map(|major| (0..5).flat_map(move |minor| (0..5).map(move |patch| (major, minor, patch))))
}

#[test]
fn test_membership_matches_semver_crate() {
    let requirements = [
        "^1.2.3", "^1.2", "^1", "^0.2.3", "^0.0.3", "^0.0", "^0", "~1.2.3", "~1.2", "~1", "*",
        "1.*", "1.2.*", "0.*", ">=1.2.3", ">1.2.3", "<1.2.3", "<=1.2.3", "=1.2.3", ">=1.2, <2",
        "1.2.3", "0.1", ">=0.2.1, <0.4.0", "<2",
    ];

    for text in requirements {
        let ours = parse_requirement(text).unwrap();
        let theirs = semver::VersionReq::parse(text).unwrap();

        for (major, minor, patch) in release_grid() {
            let expected = theirs.matches(&semver::Version::new(major, minor, patch));
            let actual = ours.contains(&Version::new(major, minor, patch));
            assert_eq!(
                actual, expected,
                "{text} on {major}.{minor}.{patch}: ours {ours}"
            );
        }
    }
}
