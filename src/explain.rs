// File: explain.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::{Category, Finding, InsecureRule, RuleId};

const MDN_HEADERS: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/";
const OWASP_HEADERS: &str = "https://owasp.org/www-project-secure-headers/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub es: &'static str,
}

impl Localized {
    const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Es => self.es,
        }
    }
}

/// Explanation attached to a finding in full (non-brief) mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub text: String,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Tool,
    InfoSection,
    Date,
    Url,
    RedirectedTo,
    Status,
    RetrievedSection,
    SummarySection,
    AllOk,
    NothingEnabled,
    AnalysisDone,
    ReportSaved,
    Reference,
    Value,
    MissingCount,
    FingerprintCount,
    InsecureCount,
    EmptyCount,
}

pub fn message(locale: Locale, message: Message) -> &'static str {
    let text = match message {
        Message::Tool => Localized::new(
            "HTTP response header security analysis",
            "Análisis de seguridad de las cabeceras HTTP de respuesta",
        ),
        Message::InfoSection => Localized::new("[0. Info]", "[0. Info]"),
        Message::Date => Localized::new("Date", "Fecha"),
        Message::Url => Localized::new("URL", "URL"),
        Message::RedirectedTo => Localized::new("Redirected to", "Redirigido a"),
        Message::Status => Localized::new("Status", "Estado"),
        Message::RetrievedSection => Localized::new(
            "[HTTP Response Headers]",
            "[Cabeceras HTTP de respuesta]",
        ),
        Message::SummarySection => Localized::new("[Summary]", "[Resumen]"),
        Message::AllOk => Localized::new(
            "Nothing to report, all seems OK!",
            "Nada que reportar, ¡todo parece correcto!",
        ),
        Message::NothingEnabled => Localized::new(
            "No HTTP security headers are enabled.",
            "No hay cabeceras HTTP de seguridad habilitadas.",
        ),
        Message::AnalysisDone => Localized::new("Analysis done in", "Análisis realizado en"),
        Message::ReportSaved => Localized::new("Report saved to", "Informe guardado en"),
        Message::Reference => Localized::new("Ref", "Ref"),
        Message::Value => Localized::new("Value", "Valor"),
        Message::MissingCount => Localized::new("Missing headers", "Cabeceras no habilitadas"),
        Message::FingerprintCount => {
            Localized::new("Fingerprint headers", "Cabeceras de fingerprint")
        }
        Message::InsecureCount => Localized::new(
            "Deprecated/Insecure headers",
            "Cabeceras obsoletas/inseguras",
        ),
        Message::EmptyCount => Localized::new("Empty headers", "Cabeceras vacías"),
    };
    text.get(locale)
}

pub fn section_title(locale: Locale, category: Category) -> &'static str {
    let title = match category {
        Category::Missing => Localized::new(
            "[1. Missing HTTP Security Headers]",
            "[1. Cabeceras de seguridad HTTP no habilitadas]",
        ),
        Category::Fingerprint => Localized::new(
            "[2. Fingerprint HTTP Response Headers]",
            "[2. Cabeceras HTTP de respuesta de fingerprint]",
        ),
        Category::DeprecatedInsecure => Localized::new(
            "[3. Deprecated HTTP Response Headers/Protocols and Insecure Values]",
            "[3. Cabeceras HTTP de respuesta/protocolos obsoletos y valores inseguros]",
        ),
        Category::Empty => Localized::new(
            "[4. Empty HTTP Response Headers Values]",
            "[4. Cabeceras HTTP de respuesta sin valor]",
        ),
        Category::CompatibilityReference => Localized::new(
            "[5. Browser Compatibility for Enabled HTTP Security Headers]",
            "[5. Compatibilidad de navegadores con las cabeceras de seguridad habilitadas]",
        ),
    };
    title.get(locale)
}

/// Category preamble printed in full mode before the findings.
pub fn intro(locale: Locale, category: Category) -> Option<&'static str> {
    let text = match category {
        Category::Fingerprint => Localized::new(
            "These headers can disclose the software stack behind the site. Remove them or strip version details.",
            "Estas cabeceras pueden revelar el software que hay detrás del sitio. Elimínalas o quita la información de versión.",
        ),
        Category::DeprecatedInsecure => Localized::new(
            "These headers are deprecated, or their values are unsafe or misconfigured.",
            "Estas cabeceras están obsoletas, o sus valores son inseguros o incorrectos.",
        ),
        Category::Empty => Localized::new(
            "Headers sent without a value give no protection and may hint at misconfiguration.",
            "Las cabeceras sin valor no protegen y pueden indicar una configuración errónea.",
        ),
        Category::Missing | Category::CompatibilityReference => return None,
    };
    Some(text.get(locale))
}

pub fn qualifier(locale: Locale, rule: InsecureRule) -> &'static str {
    use InsecureRule::*;

    let deprecated = Localized::new("Deprecated Header", "Cabecera obsoleta");
    let potentially_unsafe =
        Localized::new("Potentially Unsafe Header", "Cabecera potencialmente insegura");
    let unsafe_value = Localized::new("Unsafe Value", "Valor inseguro");
    let unsafe_scheme = Localized::new("Header via Unsafe Scheme", "Cabecera vía esquema inseguro");
    let recommended = Localized::new("Recommended Values", "Valores recomendados");
    let duplicated = Localized::new("Duplicated Values", "Valores duplicados");
    let insecure_methods = Localized::new("Insecure Methods", "Métodos inseguros");
    let incorrect = Localized::new("Incorrect Value", "Valor incorrecto");

    let text = match rule {
        AccessControlAllowMethods | AllowMethods => insecure_methods,
        AccessControlAllowOrigin => Localized::new("Unsafe Values", "Valores inseguros"),
        CacheControl | HstsRecommended => recommended,
        CspUnsafeValues => Localized::new("Unsafe Values", "Valores inseguros"),
        CspNoValidDirectives => Localized::new("No Valid Directives", "Sin directivas válidas"),
        CspDeprecatedDirectives => {
            Localized::new("Deprecated Directives", "Directivas obsoletas")
        }
        CspIncorrectValues => Localized::new("Incorrect Values", "Valores incorrectos"),
        CspInsecureSchemes => Localized::new("Insecure Schemes", "Esquemas inseguros"),
        Etag | ServerTiming | XDnsPrefetchControl => potentially_unsafe,
        TimingAllowOrigin => potentially_unsafe,
        ExpectCtUnsafeScheme | PublicKeyPinsUnsafeScheme => unsafe_scheme,
        FeaturePolicy | PublicKeyPins | XContentSecurityPolicy | XDownloadOptions | XPad
        | XWebkitCsp => deprecated,
        HttpScheme => Localized::new("Domain Via Unsafe Scheme", "Dominio vía esquema inseguro"),
        PermissionsPolicyNoFeatures => {
            Localized::new("No Valid Features", "Sin características válidas")
        }
        PermissionsPolicyPermissive => {
            Localized::new("Too Permissive Value", "Valor demasiado permisivo")
        }
        PermissionsPolicyIncorrect | XContentTypeOptionsIncorrect => incorrect,
        ReferrerPolicyRecommended => recommended,
        ReferrerPolicyUnsafe | WwwAuthenticateBasic | XPermittedCrossDomainPolicies
        | XPingback | XRobotsTag | XRuntime | XXssProtectionUnsafe => unsafe_value,
        SetCookie => Localized::new("Insecure Attributes", "Atributos inseguros"),
        HstsDuplicated | XContentTypeOptionsDuplicated | XFrameOptionsDuplicated
        | XXssProtectionDuplicated => duplicated,
        HstsIgnored => Localized::new("Ignored Header", "Cabecera ignorada"),
        ClientErrorStatus => Localized::new("Client Error", "Error de cliente"),
    };
    text.get(locale)
}

/// Display title of a finding; insecure findings read `Subject (Qualifier)`.
pub fn title(locale: Locale, finding: &Finding) -> String {
    match finding.rule {
        RuleId::Insecure(rule) => format!("{} ({})", finding.subject, qualifier(locale, rule)),
        RuleId::Missing | RuleId::Fingerprint | RuleId::Empty => finding.subject.clone(),
    }
}

/// Explanation for a finding. Fingerprint and empty findings have none,
/// their category intro covers them.
pub fn detail(locale: Locale, finding: &Finding) -> Option<Detail> {
    let (text, reference) = match finding.rule {
        RuleId::Missing => missing_detail(&finding.subject)?,
        RuleId::Insecure(rule) => insecure_detail(rule),
        RuleId::Fingerprint | RuleId::Empty => return None,
    };
    Some(Detail {
        text: text.get(locale).to_string(),
        reference: reference.to_string(),
    })
}

fn mdn(header: &str) -> String {
    format!("{}{}", MDN_HEADERS, header)
}

fn missing_detail(header: &str) -> Option<(Localized, String)> {
    let text = match header.to_ascii_lowercase().as_str() {
        "cache-control" => Localized::new(
            "Controls how responses are cached; sensitive content should not be stored by browsers or proxies.",
            "Controla cómo se almacenan las respuestas; el contenido sensible no debe guardarse en navegadores ni proxies.",
        ),
        "clear-site-data" => Localized::new(
            "Lets the server clear cookies, storage and cache of the site, for example on logout.",
            "Permite al servidor borrar cookies, almacenamiento y caché del sitio, por ejemplo al cerrar sesión.",
        ),
        "content-type" => Localized::new(
            "Declares the media type of the response so browsers do not have to guess it.",
            "Declara el tipo de contenido de la respuesta para que el navegador no tenga que adivinarlo.",
        ),
        "cross-origin-embedder-policy" => Localized::new(
            "Prevents the document from loading cross-origin resources that do not grant permission.",
            "Impide que el documento cargue recursos de otros orígenes que no lo permitan explícitamente.",
        ),
        "cross-origin-opener-policy" => Localized::new(
            "Isolates the browsing context from cross-origin windows, mitigating XS-Leaks.",
            "Aísla el contexto de navegación de ventanas de otros orígenes, mitigando ataques XS-Leaks.",
        ),
        "cross-origin-resource-policy" => Localized::new(
            "Restricts which origins may load this resource, mitigating speculative side-channel attacks.",
            "Restringe qué orígenes pueden cargar este recurso, mitigando ataques especulativos de canal lateral.",
        ),
        "content-security-policy" => Localized::new(
            "Restricts the sources the page may load content from; the main defence against XSS.",
            "Restringe los orígenes desde los que la página puede cargar contenido; principal defensa frente a XSS.",
        ),
        "expect-ct" => Localized::new(
            "Asks browsers to enforce Certificate Transparency for the site.",
            "Solicita a los navegadores que exijan Certificate Transparency para el sitio.",
        ),
        "nel" => Localized::new(
            "Network Error Logging lets the site collect reports about failed network requests.",
            "Network Error Logging permite al sitio recibir informes sobre peticiones de red fallidas.",
        ),
        "permissions-policy" => Localized::new(
            "Limits which browser features (camera, geolocation, ...) the page and its frames may use.",
            "Limita qué funciones del navegador (cámara, geolocalización, ...) pueden usar la página y sus marcos.",
        ),
        "pragma" => Localized::new(
            "HTTP/1.0 cache control, kept for backwards compatibility with old caches.",
            "Control de caché de HTTP/1.0, mantenido por compatibilidad con cachés antiguas.",
        ),
        "referrer-policy" => Localized::new(
            "Controls how much referrer information is sent with requests.",
            "Controla cuánta información de referencia se envía con las peticiones.",
        ),
        "strict-transport-security" => Localized::new(
            "Forces browsers to reach the site over HTTPS only.",
            "Obliga a los navegadores a acceder al sitio solo mediante HTTPS.",
        ),
        "x-content-type-options" => Localized::new(
            "With 'nosniff', stops browsers from MIME-sniffing responses away from the declared type.",
            "Con 'nosniff', impide que los navegadores deduzcan un tipo distinto al declarado.",
        ),
        "x-frame-options" => Localized::new(
            "Protects against clickjacking; superseded by the CSP 'frame-ancestors' directive.",
            "Protege frente a clickjacking; sustituida por la directiva CSP 'frame-ancestors'.",
        ),
        _ => return None,
    };
    Some((text, mdn(header)))
}

fn insecure_detail(rule: InsecureRule) -> (Localized, String) {
    use InsecureRule::*;

    let (text, reference) = match rule {
        AccessControlAllowMethods | AllowMethods => (
            Localized::new(
                "Only allow the methods the application needs; methods like PUT, DELETE or TRACE widen the attack surface.",
                "Permite solo los métodos que necesita la aplicación; métodos como PUT, DELETE o TRACE amplían la superficie de ataque.",
            ),
            "https://cheatsheetseries.owasp.org/cheatsheets/REST_Security_Cheat_Sheet.html#http-methods".to_string(),
        ),
        AccessControlAllowOrigin => (
            Localized::new(
                "'*' or 'null' let any origin read the response; list the trusted origins explicitly.",
                "'*' o 'null' permiten a cualquier origen leer la respuesta; indica explícitamente los orígenes de confianza.",
            ),
            mdn("Access-Control-Allow-Origin"),
        ),
        CacheControl => (
            Localized::new(
                "For sensitive content use 'no-cache, no-store, must-revalidate'.",
                "Para contenido sensible utiliza 'no-cache, no-store, must-revalidate'.",
            ),
            mdn("Cache-Control"),
        ),
        CspUnsafeValues => (
            Localized::new(
                "'unsafe-inline' and 'unsafe-eval' disable most of the XSS protection CSP offers. Use nonces or hashes instead.",
                "'unsafe-inline' y 'unsafe-eval' anulan buena parte de la protección frente a XSS. Usa nonces o hashes.",
            ),
            "https://content-security-policy.com/unsafe-inline/".to_string(),
        ),
        CspNoValidDirectives => (
            Localized::new(
                "The policy contains no recognised directive and is ignored by browsers.",
                "La política no contiene ninguna directiva reconocida y los navegadores la ignoran.",
            ),
            mdn("Content-Security-Policy"),
        ),
        CspDeprecatedDirectives => (
            Localized::new(
                "Some directives are deprecated; replace them (e.g. 'report-uri' with 'report-to').",
                "Algunas directivas están obsoletas; reemplázalas (p. ej. 'report-uri' por 'report-to').",
            ),
            mdn("Content-Security-Policy"),
        ),
        CspIncorrectValues => (
            Localized::new(
                "Directives take space-separated sources, not '='. Only nonces, hashes and reporting endpoints use it.",
                "Las directivas usan fuentes separadas por espacios, no '='. Solo nonces, hashes e informes lo usan.",
            ),
            mdn("Content-Security-Policy"),
        ),
        CspInsecureSchemes => (
            Localized::new(
                "The policy allows resources over plain 'http:' on an HTTPS site.",
                "La política permite recursos mediante 'http:' en un sitio HTTPS.",
            ),
            "https://content-security-policy.com/upgrade-insecure-requests/".to_string(),
        ),
        Etag => (
            Localized::new(
                "ETag values may leak inode information on some servers and allow user tracking.",
                "Los valores ETag pueden revelar información de inodos en algunos servidores y permitir el rastreo de usuarios.",
            ),
            mdn("ETag"),
        ),
        ExpectCtUnsafeScheme => (
            Localized::new(
                "Expect-CT is only honoured over HTTPS.",
                "Expect-CT solo se tiene en cuenta mediante HTTPS.",
            ),
            mdn("Expect-CT"),
        ),
        FeaturePolicy => (
            Localized::new(
                "Feature-Policy was renamed; use Permissions-Policy.",
                "Feature-Policy fue renombrada; utiliza Permissions-Policy.",
            ),
            mdn("Permissions-Policy"),
        ),
        HttpScheme => (
            Localized::new(
                "The site is served over plain HTTP; traffic can be read and altered in transit.",
                "El sitio se sirve mediante HTTP; el tráfico puede ser leído y alterado en tránsito.",
            ),
            "https://cheatsheetseries.owasp.org/cheatsheets/Transport_Layer_Security_Cheat_Sheet.html".to_string(),
        ),
        PermissionsPolicyNoFeatures => (
            Localized::new(
                "The policy names no known feature and has no effect.",
                "La política no nombra ninguna característica conocida y no tiene efecto.",
            ),
            mdn("Permissions-Policy"),
        ),
        PermissionsPolicyPermissive => (
            Localized::new(
                "'*' grants the feature to every origin, including embedded third parties.",
                "'*' concede la característica a cualquier origen, incluidos terceros embebidos.",
            ),
            mdn("Permissions-Policy"),
        ),
        PermissionsPolicyIncorrect => (
            Localized::new(
                "'none' is Feature-Policy syntax; to disable a feature use an empty allowlist: feature=().",
                "'none' es sintaxis de Feature-Policy; para desactivar una característica usa una lista vacía: feature=().",
            ),
            mdn("Permissions-Policy"),
        ),
        PublicKeyPins => (
            Localized::new(
                "HTTP Public Key Pinning is deprecated and ignored by browsers.",
                "HTTP Public Key Pinning está obsoleta y los navegadores la ignoran.",
            ),
            mdn("Public-Key-Pins"),
        ),
        PublicKeyPinsUnsafeScheme => (
            Localized::new(
                "Public-Key-Pins is only honoured over HTTPS.",
                "Public-Key-Pins solo se tiene en cuenta mediante HTTPS.",
            ),
            mdn("Public-Key-Pins"),
        ),
        ReferrerPolicyRecommended => (
            Localized::new(
                "Prefer 'strict-origin-when-cross-origin', 'strict-origin' or 'no-referrer'.",
                "Es preferible 'strict-origin-when-cross-origin', 'strict-origin' o 'no-referrer'.",
            ),
            mdn("Referrer-Policy"),
        ),
        ReferrerPolicyUnsafe => (
            Localized::new(
                "'unsafe-url' sends the full URL, including path and query, to every destination.",
                "'unsafe-url' envía la URL completa, incluidos ruta y parámetros, a cualquier destino.",
            ),
            mdn("Referrer-Policy"),
        ),
        ServerTiming => (
            Localized::new(
                "Server timing metrics can disclose internal architecture and aid timing attacks.",
                "Las métricas de tiempo del servidor pueden revelar la arquitectura interna y facilitar ataques de tiempo.",
            ),
            mdn("Server-Timing"),
        ),
        SetCookie => (
            Localized::new(
                "Cookies should carry both 'Secure' and 'HttpOnly'.",
                "Las cookies deberían incluir tanto 'Secure' como 'HttpOnly'.",
            ),
            mdn("Set-Cookie"),
        ),
        HstsRecommended => (
            Localized::new(
                "Use 'max-age' of at least one year (31536000) together with 'includeSubDomains'.",
                "Utiliza 'max-age' de al menos un año (31536000) junto con 'includeSubDomains'.",
            ),
            "https://https.cio.gov/hsts/".to_string(),
        ),
        HstsDuplicated | XContentTypeOptionsDuplicated | XFrameOptionsDuplicated
        | XXssProtectionDuplicated => (
            Localized::new(
                "The header carries more than one value; browsers may ignore it or pick the wrong one.",
                "La cabecera incluye más de un valor; los navegadores pueden ignorarla o elegir el incorrecto.",
            ),
            OWASP_HEADERS.to_string(),
        ),
        HstsIgnored => (
            Localized::new(
                "Strict-Transport-Security sent over HTTP is ignored by browsers.",
                "Strict-Transport-Security enviada mediante HTTP es ignorada por los navegadores.",
            ),
            mdn("Strict-Transport-Security"),
        ),
        TimingAllowOrigin => (
            Localized::new(
                "'*' exposes detailed resource timing to every origin.",
                "'*' expone los tiempos detallados de los recursos a cualquier origen.",
            ),
            mdn("Timing-Allow-Origin"),
        ),
        WwwAuthenticateBasic => (
            Localized::new(
                "Basic authentication over HTTP sends credentials in clear text.",
                "La autenticación Basic mediante HTTP envía las credenciales en claro.",
            ),
            mdn("WWW-Authenticate"),
        ),
        XContentSecurityPolicy | XWebkitCsp => (
            Localized::new(
                "Experimental CSP header, deprecated; use Content-Security-Policy.",
                "Cabecera CSP experimental y obsoleta; utiliza Content-Security-Policy.",
            ),
            mdn("Content-Security-Policy"),
        ),
        XContentTypeOptionsIncorrect => (
            Localized::new(
                "The only valid value is 'nosniff'.",
                "El único valor válido es 'nosniff'.",
            ),
            mdn("X-Content-Type-Options"),
        ),
        XDnsPrefetchControl => (
            Localized::new(
                "DNS prefetching can leak visited links to DNS resolvers.",
                "La precarga DNS puede revelar enlaces visitados a los resolutores DNS.",
            ),
            mdn("X-DNS-Prefetch-Control"),
        ),
        XDownloadOptions => (
            Localized::new(
                "Only ever honoured by Internet Explorer 8.",
                "Solo la tenía en cuenta Internet Explorer 8.",
            ),
            OWASP_HEADERS.to_string(),
        ),
        XPad => (
            Localized::new(
                "Workaround for an old Netscape bug; no longer needed.",
                "Solución para un antiguo fallo de Netscape; ya no es necesaria.",
            ),
            OWASP_HEADERS.to_string(),
        ),
        XPermittedCrossDomainPolicies => (
            Localized::new(
                "'all' lets any cross-domain policy file on the site apply; use 'none'.",
                "'all' permite aplicar cualquier fichero de políticas del sitio; utiliza 'none'.",
            ),
            OWASP_HEADERS.to_string(),
        ),
        XPingback => (
            Localized::new(
                "Advertising xmlrpc.php invites pingback abuse and brute-force attempts.",
                "Anunciar xmlrpc.php facilita el abuso de pingbacks y los ataques de fuerza bruta.",
            ),
            "https://www.wordfence.com/blog/2015/10/should-you-disable-xml-rpc-on-wordpress/".to_string(),
        ),
        XRobotsTag => (
            Localized::new(
                "'all' lets crawlers index everything; restrict what search engines may index.",
                "'all' permite a los rastreadores indexarlo todo; limita lo que pueden indexar.",
            ),
            "https://developers.google.com/search/docs/crawling-indexing/robots-meta-tag".to_string(),
        ),
        XRuntime => (
            Localized::new(
                "Request processing time can disclose the framework and aid timing attacks.",
                "El tiempo de proceso de la petición puede revelar el framework y facilitar ataques de tiempo.",
            ),
            OWASP_HEADERS.to_string(),
        ),
        XXssProtectionUnsafe => (
            Localized::new(
                "The browser XSS auditor is deprecated and can introduce vulnerabilities; set '0' and rely on CSP.",
                "El auditor XSS del navegador está obsoleto y puede introducir vulnerabilidades; usa '0' y confía en CSP.",
            ),
            mdn("X-XSS-Protection"),
        ),
        ClientErrorStatus => (
            Localized::new(
                "The server answered with a client error; the analysed headers may not be those of the real page.",
                "El servidor respondió con un error de cliente; las cabeceras analizadas pueden no ser las de la página real.",
            ),
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status#client_error_responses".to_string(),
        ),
    };
    (text, reference)
}
