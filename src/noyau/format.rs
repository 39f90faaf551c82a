// src/noyau/format.rs
//
// Règles d'affichage des nombres.
// - La saisie reste une chaîne : on ne la reformate qu'au rendu.
// - Au plus 10 décimales affichées, zéros finaux retirés par
//   aller-retour dans f64 (parse -> Display).

/// Nombre maximal de décimales affichées.
const DECIMALES_MAX: usize = 10;

/// Règle déterministe appliquée à la saisie avant rendu.
///
/// Si le texte se lit comme un nombre ET contient un point qui n'est pas
/// en dernière position : arrondi à min(décimales saisies, 10), puis zéros
/// finaux retirés. Sinon le texte est rendu tel quel ("0.", "", message...).
pub fn format_affichage(texte: &str) -> String {
    let Ok(nombre) = texte.parse::<f64>() else {
        return texte.to_string();
    };

    if let Some(pos) = texte.find('.') {
        if pos + 1 < texte.len() {
            let decimales = (texte.len() - pos - 1).min(DECIMALES_MAX);
            let arrondi = format!("{nombre:.decimales$}");
            return match arrondi.parse::<f64>() {
                Ok(v) => v.to_string(),
                Err(_) => arrondi,
            };
        }
    }

    texte.to_string()
}

/// Nombre -> texte : pas de point pour une valeur entière, sinon au plus
/// 10 décimales sans zéros finaux. Utilisé pour les résultats d'historique.
pub fn format_nombre(n: f64) -> String {
    if n.fract() == 0.0 {
        return n.to_string();
    }

    let fixe = format!("{:.*}", DECIMALES_MAX, n);
    match fixe.parse::<f64>() {
        Ok(v) => v.to_string(),
        Err(_) => fixe,
    }
}
