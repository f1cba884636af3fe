use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub theaters: Vec<TheaterConfig>,
    pub user_agent: String,
    pub output_dir: String,
}

/// One theater in the roster: the geocoded identity carried into the
/// output record, plus the schedule page to fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheaterConfig {
    pub theater_name: String,
    pub theater_name_en: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub schedule_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Roster inlined from the geocoded Tokyo theater list.
        let theaters = vec![
            TheaterConfig {
                theater_name: "TOHOシネマズ六本木ヒルズ".to_string(),
                theater_name_en: "TOHO Cinemas Roppongi Hills".to_string(),
                address: "東京都港区六本木6-10-2".to_string(),
                latitude: 35.6604,
                longitude: 139.7292,
                schedule_url: "https://hlo.tohotheater.jp/net/schedule/009/TNPI2000J01.do".to_string(),
            },
            TheaterConfig {
                theater_name: "TOHOシネマズ日比谷".to_string(),
                theater_name_en: "TOHO Cinemas Hibiya".to_string(),
                address: "東京都千代田区有楽町1-1-2".to_string(),
                latitude: 35.6743,
                longitude: 139.7595,
                schedule_url: "https://hlo.tohotheater.jp/net/schedule/081/TNPI2000J01.do".to_string(),
            },
            TheaterConfig {
                theater_name: "MOVIX亀有".to_string(),
                theater_name_en: "MOVIX Kameari".to_string(),
                address: "東京都葛飾区亀有3-49-3".to_string(),
                latitude: 35.7674,
                longitude: 139.8496,
                schedule_url: "https://www.smt-cinema.com/site/kameari/".to_string(),
            },
            TheaterConfig {
                theater_name: "イオンシネマ板橋".to_string(),
                theater_name_en: "AEON Cinema Itabashi".to_string(),
                address: "東京都板橋区徳丸2-6-1".to_string(),
                latitude: 35.7773,
                longitude: 139.6606,
                schedule_url: "https://www.aeoncinema.com/cinema/itabashi/".to_string(),
            },
            TheaterConfig {
                theater_name: "T・ジョイPRINCE品川".to_string(),
                theater_name_en: "T-Joy Prince Shinagawa".to_string(),
                address: "東京都港区高輪4-10-30".to_string(),
                latitude: 35.6285,
                longitude: 139.7357,
                schedule_url: "https://tjoy.jp/t-joy_prince_shinagawa".to_string(),
            },
            TheaterConfig {
                theater_name: "ユナイテッド・シネマ豊洲".to_string(),
                theater_name_en: "United Cinemas Toyosu".to_string(),
                address: "東京都江東区豊洲2-4-9".to_string(),
                latitude: 35.6551,
                longitude: 139.7927,
                schedule_url: "https://www.unitedcinemas.jp/toyosu/daily.php".to_string(),
            },
            TheaterConfig {
                theater_name: "新宿ピカデリー".to_string(),
                theater_name_en: "Shinjuku Piccadilly".to_string(),
                address: "東京都新宿区新宿3-15-15".to_string(),
                latitude: 35.6924,
                longitude: 139.7048,
                schedule_url: "https://www.smt-cinema.com/site/shinjuku/".to_string(),
            },
        ];

        Ok(Config {
            theaters,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string(),
            output_dir: "data".to_string(),
        })
    }
}
