//! Wi-Fi network string serializer (`WIFI:S:...;T:...;P:...;;`).

use crate::model::WifiSecurity;

/// Renders the Wi-Fi join string understood by phone camera apps.
///
/// The `P:` field is emitted even for an empty password so the string
/// shape stays stable across security modes.
pub(super) fn network(ssid: &str, password: &str, security: WifiSecurity) -> String {
    format!("WIFI:S:{ssid};T:{};P:{password};;", security.token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_tokens() {
        assert_eq!(
            network("a", "b", WifiSecurity::Wpa),
            "WIFI:S:a;T:WPA;P:b;;"
        );
        assert_eq!(
            network("a", "b", WifiSecurity::Wep),
            "WIFI:S:a;T:WEP;P:b;;"
        );
        assert_eq!(
            network("a", "", WifiSecurity::Open),
            "WIFI:S:a;T:nopass;P:;;"
        );
    }
}
