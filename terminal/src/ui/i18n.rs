//! Swap view labels in the four supported languages.

use crate::config::Language;

/// Translatable label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Sell,
    Buy,
    SellAmount,
    BuyAmount,
    PlaceOrder,
    Processing,
    FetchingBestPrice,
    SwitchTradingDirection,
    Disclosure,
    SwitchTheme,
    ConnectWallet,
    Network,
    Reset,
    Rate,
    GuaranteedPrice,
    EstimatedGas,
    Sources,
    TransactionExported,
}

impl Key {
    pub fn all() -> &'static [Key] {
        &[
            Key::Sell,
            Key::Buy,
            Key::SellAmount,
            Key::BuyAmount,
            Key::PlaceOrder,
            Key::Processing,
            Key::FetchingBestPrice,
            Key::SwitchTradingDirection,
            Key::Disclosure,
            Key::SwitchTheme,
            Key::ConnectWallet,
            Key::Network,
            Key::Reset,
            Key::Rate,
            Key::GuaranteedPrice,
            Key::EstimatedGas,
            Key::Sources,
            Key::TransactionExported,
        ]
    }
}

/// Label for `key` in `language`; English when the language has no entry.
pub fn t(language: Language, key: Key) -> &'static str {
    translate(language, key).unwrap_or_else(|| english(key))
}

fn english(key: Key) -> &'static str {
    match key {
        Key::Sell => "Sell",
        Key::Buy => "Buy",
        Key::SellAmount => "Sell Amount",
        Key::BuyAmount => "Buy Amount",
        Key::PlaceOrder => "Place Order",
        Key::Processing => "Processing",
        Key::FetchingBestPrice => "Fetching best price",
        Key::SwitchTradingDirection => "Switch trading direction",
        Key::Disclosure => "WARNING: THIS IS A PROOF OF CONCEPT. ONLY TRADE SMALL AMOUNTS ON POLYGON.",
        Key::SwitchTheme => "Switch between light and dark mode",
        Key::ConnectWallet => "Connect Wallet",
        Key::Network => "Network",
        Key::Reset => "Reset",
        Key::Rate => "Rate",
        Key::GuaranteedPrice => "Guaranteed price",
        Key::EstimatedGas => "Estimated gas",
        Key::Sources => "Sources",
        Key::TransactionExported => "Transaction exported for signing",
    }
}

fn translate(language: Language, key: Key) -> Option<&'static str> {
    let text = match (language, key) {
        (Language::En, _) => return None,

        (Language::Es, Key::Sell) => "Vender",
        (Language::Es, Key::Buy) => "Comprar",
        (Language::Es, Key::SellAmount) => "Cantidad de venta",
        (Language::Es, Key::BuyAmount) => "Cantidad de compra",
        (Language::Es, Key::PlaceOrder) => "Realizar Pedido",
        (Language::Es, Key::Processing) => "Procesando",
        (Language::Es, Key::FetchingBestPrice) => "Obteniendo el mejor precio",
        (Language::Es, Key::SwitchTradingDirection) => "Cambiar las direcciones comerciales",
        (Language::Es, Key::Disclosure) => {
            "ADVERTENCIA: ESTA ES UNA PRUEBA DE CONCEPTO. SÓLO COMERCIE PEQUEÑAS CANTIDADES EN POLYGON."
        }
        (Language::Es, Key::SwitchTheme) => "Cambiar entre modo claro y oscuro",
        (Language::Es, Key::ConnectWallet) => "Conectar billetera",
        (Language::Es, Key::Network) => "Red",
        (Language::Es, Key::Rate) => "Tasa",
        (Language::Es, Key::GuaranteedPrice) => "Precio garantizado",
        (Language::Es, Key::EstimatedGas) => "Gas estimado",
        (Language::Es, Key::Sources) => "Fuentes",
        (Language::Es, Key::TransactionExported) => "Transacción exportada para firmar",

        (Language::Fr, Key::Sell) => "Vendre",
        (Language::Fr, Key::Buy) => "Acheter",
        (Language::Fr, Key::SellAmount) => "Montant de la vente",
        (Language::Fr, Key::BuyAmount) => "Montant de l'achat",
        (Language::Fr, Key::PlaceOrder) => "Passer la commande",
        (Language::Fr, Key::Processing) => "Traitement",
        (Language::Fr, Key::FetchingBestPrice) => "Obtenir le meilleur prix",
        (Language::Fr, Key::SwitchTradingDirection) => "Changer de direction commerciale",
        (Language::Fr, Key::Disclosure) => {
            "ATTENTION : CECI EST UNE PREUVE DE CONCEPT. COMMERCEZ UNIQUEMENT DE PETITES QUANTITÉS SUR POLYGONE."
        }
        (Language::Fr, Key::SwitchTheme) => "Basculer entre les modes clair et sombre",
        (Language::Fr, Key::ConnectWallet) => "Connecter portefeuille",
        (Language::Fr, Key::Network) => "Réseau",
        (Language::Fr, Key::Rate) => "Taux",
        (Language::Fr, Key::GuaranteedPrice) => "Prix garanti",
        (Language::Fr, Key::EstimatedGas) => "Gaz estimé",
        (Language::Fr, Key::Sources) => "Sources",
        (Language::Fr, Key::TransactionExported) => "Transaction exportée pour signature",

        (Language::Ko, Key::Sell) => "팔다",
        (Language::Ko, Key::Buy) => "구입하다",
        (Language::Ko, Key::SellAmount) => "판매 금액",
        (Language::Ko, Key::BuyAmount) => "구매 금액",
        (Language::Ko, Key::PlaceOrder) => "주문하기",
        (Language::Ko, Key::Processing) => "처리",
        (Language::Ko, Key::FetchingBestPrice) => "최고의 가격 얻기",
        (Language::Ko, Key::SwitchTradingDirection) => "거래 방향 전환",
        (Language::Ko, Key::Disclosure) => "경고: 이것은 개념 증명입니다. 소액 거래만 가능",
        (Language::Ko, Key::SwitchTheme) => "밝은 모드와 어두운 모드 간 전환",
        (Language::Ko, Key::ConnectWallet) => "지갑 연결",
        (Language::Ko, Key::Network) => "네트워크",
        (Language::Ko, Key::Rate) => "환율",
        (Language::Ko, Key::GuaranteedPrice) => "보장 가격",
        (Language::Ko, Key::EstimatedGas) => "예상 가스",
        (Language::Ko, Key::Sources) => "유동성 출처",
        (Language::Ko, Key::TransactionExported) => "서명을 위해 트랜잭션을 내보냈습니다",

        _ => return None,
    };
    Some(text)
}
