#[cfg(test)]
mod corpus {
    use crate::{CorpusModelSource, DEU, ENG, FRA, ModelCache, RUS, SPA, UKR};
    use std::sync::Arc;

    pub const ENGLISH: &str = "Languages are awesome. People who learn new languages are often \
        surprised by how much they enjoy it. The awesome thing about human languages is that they \
        are always changing. Every language has its own sounds, words and grammar, and speakers are \
        proud of them. Learning languages opens doors to other cultures and other ways of thinking. \
        Some languages are spoken by millions of people while others are spoken by only a few. We \
        are going to the market this morning because the weather is nice and the shops are open. \
        The quick brown fox jumps over the lazy dog while the children are playing in the garden.";

    pub const FRENCH: &str = "Les langues sont merveilleuses. Apprendre une nouvelle langue est \
        une aventure qui ouvre l'esprit. Le chat est sur la table et le chien dort dans le jardin. \
        Nous allons au marché ce matin parce qu'il fait beau et que les magasins sont ouverts. La \
        France est un pays où l'on parle français, mais aussi beaucoup d'autres langues régionales. \
        Les enfants jouent dans la cour de l'école pendant que les parents attendent devant la \
        porte. Je voudrais un café avec du lait, s'il vous plaît.";

    pub const GERMAN: &str = "Sprachen sind wunderbar. Wer eine neue Sprache lernt, entdeckt eine \
        andere Welt. Die Katze liegt auf dem Tisch und der Hund schläft im Garten. Wir gehen heute \
        Morgen auf den Markt, weil das Wetter schön ist und die Geschäfte geöffnet sind. In \
        Deutschland spricht man Deutsch, aber es gibt auch viele Dialekte. Die Kinder spielen auf \
        dem Hof der Schule, während die Eltern vor dem Tor warten. Ich möchte einen Kaffee mit \
        Milch, bitte. Viele Grüße aus der Straße am Fluss.";

    pub const SPANISH: &str = "Los idiomas son maravillosos. Aprender una nueva lengua es una \
        aventura que abre la mente. El gato está sobre la mesa y el perro duerme en el jardín. \
        Vamos al mercado esta mañana porque hace buen tiempo y las tiendas están abiertas. En \
        España se habla español, pero también hay muchas otras lenguas. Los niños juegan en el \
        patio de la escuela mientras los padres esperan delante de la puerta. Quisiera un café con \
        leche, por favor.";

    pub const RUSSIAN: &str = "Языки прекрасны. Изучать новый язык интересно и полезно. Кошка \
        лежит на столе, а собака спит в саду. Мы идём на рынок сегодня утром, потому что погода \
        хорошая и магазины открыты. Дети играют во дворе школы, пока родители ждут у ворот.";

    pub const UKRAINIAN: &str = "Мови чудові. Вивчати нову мову цікаво і корисно. Кішка лежить на \
        столі, а собака спить у саду. Ми йдемо на ринок сьогодні вранці, бо погода гарна і \
        крамниці відчинені. Діти граються на подвір'ї школи, поки батьки чекають біля воріт.";

    pub fn source() -> CorpusModelSource {
        CorpusModelSource::new()
            .with_corpus(ENG, ENGLISH)
            .with_corpus(FRA, FRENCH)
            .with_corpus(DEU, GERMAN)
            .with_corpus(SPA, SPANISH)
            .with_corpus(RUS, RUSSIAN)
            .with_corpus(UKR, UKRAINIAN)
    }

    /// Fresh store over the trained corpora, for tests that count loads.
    pub fn isolated_cache() -> Arc<ModelCache> {
        Arc::new(ModelCache::new(source()))
    }

    lazy_static::lazy_static! {
        /// Shared warm store; training every table once keeps the suite fast.
        pub static ref TRAINED: Arc<ModelCache> = isolated_cache();
    }
}
