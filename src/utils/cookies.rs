// ============================================================================
// COOKIES - Lectura de `document.cookie`
// ============================================================================

/// Buscar `name` en un string estilo `document.cookie` (`a=1; b=2`).
///
/// Gana el primer par que coincide y su valor se decodifica (percent-encoding).
/// Devuelve `None` si el string está vacío o ninguna cookie tiene ese nombre.
pub fn find_cookie(cookie_string: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    cookie_string
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let value = pair.strip_prefix(name)?.strip_prefix('=')?;
            Some(decode(value))
        })
}

fn decode(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        // Escapes mal formados: se devuelve el valor tal cual
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "sessionid=xyz; csrftoken=abc123; theme=dark";
        assert_eq!(find_cookie(cookies, "csrftoken"), Some("abc123".to_string()));
    }

    #[test]
    fn missing_or_empty_store_gives_none() {
        assert_eq!(find_cookie("", "csrftoken"), None);
        assert_eq!(find_cookie("sessionid=xyz", "csrftoken"), None);
    }

    #[test]
    fn prefix_of_another_name_does_not_match() {
        assert_eq!(find_cookie("csrftoken2=nope; xcsrftoken=no", "csrftoken"), None);
    }

    #[test]
    fn value_is_percent_decoded() {
        assert_eq!(find_cookie("csrftoken=a%2Bb%3D", "csrftoken"), Some("a+b=".to_string()));
    }

    #[test]
    fn first_pair_wins_and_empty_value_is_kept() {
        assert_eq!(find_cookie("csrftoken=; csrftoken=later", "csrftoken"), Some(String::new()));
    }
}
