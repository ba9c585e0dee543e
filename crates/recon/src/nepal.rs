//! Nepal's administrative hierarchy: 7 provinces, 76 districts and their
//! local levels, in the order the listing form presents them.

pub(crate) type DistrictRow = (&'static str, &'static [&'static str]);
pub(crate) type ProvinceRow = (&'static str, &'static [DistrictRow]);

pub(crate) const NEPAL: &[ProvinceRow] = &[
    (
        "Koshi Pradesh",
        &[
            (
                "Bhojpur",
                &[
                    "Bhojpur Municipality", "Shadanand Municipality", "Tyamke Maiyunm",
                    "Ramprasad Rai", "Arun", "Pauwadungma", "Salpasilichho", "Aamchok",
                    "Hatuwagadhi",
                ],
            ),
            (
                "Dhankuta",
                &[
                    "Dhankuta Municipality", "Pakhribas Municipality", "Mahalaxmi Municipality",
                    "Sangurigadhi", "Chhathar Jorpati", "Chaubise", "Khalsa Chhintang Sahidbhumi",
                ],
            ),
            (
                "Ilam",
                &[
                    "Ilam Municipality", "Deumai Municipality", "Mai Municipality",
                    "Suryodaya Municipality", "Phakphokthum", "Mai Jogmai", "Chulachuli", "Rong",
                    "Mangsebung", "Sandakpur",
                ],
            ),
            (
                "Jhapa",
                &[
                    "Mechinagar Municipality", "Damak Municipality", "Kankai Municipality",
                    "Bhadrapur Municipality", "Arjundhara Municipality",
                    "Shivasatakshi Municipality", "Gauradaha Municipality", "Birtamod Municipality",
                    "Gaurigunj", "Barhadashi", "Jhapa", "Buddhashanti", "Haldibari", "Kachankawal",
                    "Kamal",
                ],
            ),
            (
                "Khotang",
                &[
                    "Halesi Tuwachung Municipality", "Rupakot Majhuwagadhi Municipality",
                    "Aiselukharka", "Lamidanda", "Jantedhunga", "Kepilasgadhi",
                    "Diprung Chuichumma", "Sakela", "Barahapokhari", "Rawabesi",
                ],
            ),
            (
                "Morang",
                &[
                    "Biratnagar Metropolitan", "Letang Municipality", "Sundarharaicha Municipality",
                    "Pathari-Sanischare Municipality", "Urlabari Municipality",
                    "Rangeli Municipality", "Ratuwamai Municipality", "Belbari Municipality",
                    "Sunwarshi Municipality", "Budhiganga", "Gramthan", "Katahari", "Dhanpalthan",
                    "Jahada", "Kanepokhari", "Kerabari", "Miklajung",
                ],
            ),
            (
                "Okhaldhunga",
                &[
                    "Siddhicharan Municipality", "Khijidemba", "Champadevi", "Chisankhugadhi",
                    "Manebhanjyang", "Molung", "Likhu", "Sunkoshi",
                ],
            ),
            (
                "Panchthar",
                &[
                    "Phidim Municipality", "Hilihang", "Kummayak", "Miklajung", "Phalelung",
                    "Phalgunanda", "Tumbewa", "Yangwarak",
                ],
            ),
            (
                "Sankhuwasabha",
                &[
                    "Chainpur Municipality", "Dharmadevi Municipality", "Khandbari Municipality",
                    "Madi Municipality", "Panchkhapan Municipality", "Bhotkhola", "Chichila",
                    "Makalu", "Savapokhari", "Silichong",
                ],
            ),
            (
                "Solukhumbu",
                &[
                    "Solududhkunda Municipality", "Dudhkunda Municipality", "Dudhkoshi",
                    "Khumbu Pasanglhamu", "Mahakulung", "Likhu Pike", "Nechasalyan", "Sotang",
                ],
            ),
            (
                "Sunsari",
                &[
                    "Itahari Sub-Metropolitan", "Dharan Sub-Metropolitan", "Inaruwa Municipality",
                    "Duhabi Municipality", "Ramdhuni Municipality", "Barahachhetra Municipality",
                    "Dewanganj", "Koshi", "Gadhi", "Barju", "Bhokraha Narsingh", "Harinagara",
                ],
            ),
            (
                "Taplejung",
                &[
                    "Phungling Municipality", "Aathrai Tribeni", "Sidingba", "Phaktanglung",
                    "Mikwakhola", "Meringden", "Maiwakhola", "Pathivara Yangwarak", "Sirijangha",
                ],
            ),
            (
                "Terhathum",
                &[
                    "Myanglung Municipality", "Laligurans Municipality", "Aathrai", "Chhathar",
                    "Fedap", "Menchhayayem", "Phedap",
                ],
            ),
            (
                "Udayapur",
                &[
                    "Triyuga Municipality", "Katari Municipality", "Chaudandigadhi Municipality",
                    "Belaka Municipality", "Udayapurgadhi", "Rautamai", "Tapli", "Limchungbung",
                ],
            ),
        ],
    ),
    (
        "Madhesh Pradesh",
        &[
            (
                "Saptari",
                &[
                    "Rajbiraj Municipality", "Kanchanrup Municipality", "Dakneshwori Municipality",
                    "Bodebarsain Municipality", "Khadak Municipality", "Sambhunath Municipality",
                    "Saptakoshi Municipality", "Surunga Municipality",
                    "Hanumannagar Kankalini Municipality", "Agnisaira Krishnasavaran",
                    "Balan-Bihul", "Bishnupur", "Chhinnamasta", "Mahadeva", "Rajgadh", "Rupani",
                    "Tirhut", "Tilathi Koiladi",
                ],
            ),
            (
                "Siraha",
                &[
                    "Lahan Municipality", "Dhangadhimai Municipality", "Siraha Municipality",
                    "Golbazar Municipality", "Mirchaiya Municipality", "Kalyanpur Municipality",
                    "Karjanha Municipality", "Sukhipur Municipality", "Bhagwanpur", "Aurahi",
                    "Bishnupur", "Bariyarpatti", "Laxmipur Patari", "Naraha", "Sakhuwanankarkatti",
                    "Arnama", "Nawarajpur",
                ],
            ),
            (
                "Dhanusha",
                &[
                    "Janakpur Sub-Metropolitan", "Chhireshwarnath Municipality",
                    "Ganeshman Charnath Municipality", "Dhanushadham Municipality",
                    "Nagarain Municipality", "Bideha Municipality", "Mithila Municipality",
                    "Shahidnagar Municipality", "Sabaila Municipality", "Kamala Municipality",
                    "Mithila Bihari Municipality", "Hansapur Municipality", "Janaknandani",
                    "Bateshwar", "Mukhiyapatti Musaharmiya", "Lakshminya", "Aurahi", "Dhanauji",
                ],
            ),
            (
                "Mahottari",
                &[
                    "Jaleshwor Municipality", "Bardibas Municipality", "Gaushala Municipality",
                    "Loharpatti Municipality", "Ramgopalpur Municipality",
                    "Manara Siswa Municipality", "Matihani Municipality", "Bhangaha Municipality",
                    "Balawa Municipality", "Aaurahi", "Ekdanra", "Sonama", "Samsi", "Mahottari",
                    "Pipra",
                ],
            ),
            (
                "Sarlahi",
                &[
                    "Ishworpur Municipality", "Malangwa Municipality", "Lalbandi Municipality",
                    "Haripur Municipality", "Haripurwa Municipality", "Hariwan Municipality",
                    "Balara Municipality", "Godaita Municipality", "Bagmati Municipality",
                    "Kabilasi", "Chakraghatta", "Chandranagar", "Dhankaul", "Brahampuri",
                    "Ramnagar", "Basbariya", "Kaudena", "Parsa",
                ],
            ),
            (
                "Rautahat",
                &[
                    "Baudhimai Municipality", "Brindaban Municipality", "Chandrapur Municipality",
                    "Dewahi Gonahi Municipality", "Gadhimai Municipality", "Gaur Municipality",
                    "Garuda Municipality", "Gujara Municipality", "Ishanath Municipality",
                    "Katahariya Municipality", "Madhav Narayan Municipality",
                    "Maulapur Municipality", "Paroha Municipality",
                    "Phatuwa Bijayapur Municipality", "Rajdevi Municipality", "Rajpur Municipality",
                    "Durga Bhagwati", "Yamunamai",
                ],
            ),
            (
                "Bara",
                &[
                    "Kalaiya Sub-Metropolitan", "Jeetpur Simara Sub-Metropolitan",
                    "Kolhabi Municipality", "Nijgadh Municipality", "Mahagadhimai Municipality",
                    "Simraungadh Municipality", "Pacharauta Municipality", "Pheta", "Devtal",
                    "Parwanipur", "Prasauni", "Adarsh Kotwal", "Baragadhi", "Suwarna", "Karaiyamai",
                    "Jitpur Simara",
                ],
            ),
            (
                "Parsa",
                &[
                    "Birgunj Metropolitan", "Pokhariya Municipality", "Bahudarmai Municipality",
                    "Parsagadhi Municipality", "Bindabasini", "Chhipaharmai", "Dhobini",
                    "Jagarnathpur", "Jirabhawani", "Kalikamai", "Paterwa Sugauli",
                    "Sakhuwa Prasauni", "Thori", "Vishrampur",
                ],
            ),
        ],
    ),
    (
        "Bagmati Pradesh",
        &[
            (
                "Sindhuli",
                &[
                    "Kamalamai Municipality", "Dudhouli Municipality", "Sunkoshi",
                    "Hariharpurgadhi", "Tinpatan", "Marin", "Golanjor", "Phikkal", "Ghyanglekh",
                ],
            ),
            (
                "Ramechhap",
                &[
                    "Manthali Municipality", "Ramechhap Municipality", "Umakunda", "Khandadevi",
                    "Doramba", "Gokulganga", "Likhu Tamakoshi", "Sunapati",
                ],
            ),
            (
                "Dolakha",
                &[
                    "Bhimeshwar Municipality", "Jiri Municipality", "Kalinchok", "Gaurishankar",
                    "Tamakoshi", "Melung", "Bigu", "Baiteshwar", "Shailung",
                ],
            ),
            (
                "Sindhupalchok",
                &[
                    "Chautara Sangachokgadhi Municipality", "Barhabise Municipality",
                    "Melamchi Municipality", "Balephi", "Sunkoshi", "Indrawati", "Jugal",
                    "Panchpokhari Thangpal", "Bhotekoshi", "Lisankhu Pakhar", "Helambu",
                    "Tripurasundari",
                ],
            ),
            (
                "Kavrepalanchok",
                &[
                    "Dhulikhel Municipality", "Banepa Municipality", "Panauti Municipality",
                    "Panchkhal Municipality", "Namobuddha Municipality",
                    "Mandan Deupur Municipality", "Khanikhola", "Chauri Deurali", "Temal",
                    "Bethanchok", "Bhumlu", "Mahabharat", "Roshi",
                ],
            ),
            (
                "Lalitpur",
                &[
                    "Lalitpur Metropolitan", "Godawari Municipality", "Mahalaxmi Municipality",
                    "Konjyosom", "Bagmati", "Mahankal",
                ],
            ),
            (
                "Bhaktapur",
                &[
                    "Bhaktapur Municipality", "Changunarayan Municipality",
                    "Madhyapur Thimi Municipality", "Suryabinayak Municipality",
                ],
            ),
            (
                "Kathmandu",
                &[
                    "Kathmandu Metropolitan", "Kageshwari Manohara Municipality",
                    "Kirtipur Municipality", "Gokarneshwor Municipality",
                    "Chandragiri Municipality", "Tokha Municipality", "Tarakeshwar Municipality",
                    "Dakshinkali Municipality", "Nagarjun Municipality",
                    "Budhanilkantha Municipality", "Shankharapur Municipality",
                ],
            ),
            (
                "Nuwakot",
                &[
                    "Bidur Municipality", "Belkotgadhi Municipality", "Kakani", "Kispang", "Likhu",
                    "Myagang", "Shivapuri", "Tadi", "Tarkeshwar", "Dupcheshwar", "Panchakanya",
                    "Suryagadhi",
                ],
            ),
            ("Rasuwa", &["Uttargaya", "Kalika", "Gosaikunda", "Naukunda", "Parbatikunda"]),
            (
                "Dhading",
                &[
                    "Nilkantha Municipality", "Dhunibesi Municipality", "Khaniyabas", "Gajuri",
                    "Galchi", "Gangajamuna", "Jwalamukhi", "Thakre", "Netrawati Dabjong",
                    "Benighat Rorang", "Rubi Valley", "Siddhalek", "Tripurasundari",
                ],
            ),
            (
                "Makwanpur",
                &[
                    "Hetauda Sub-Metropolitan", "Thaha Municipality", "Indrasarowar", "Kailash",
                    "Bakaiya", "Bagmati", "Bhimphedi", "Makawanpurgadhi", "Manahari", "Raksirang",
                ],
            ),
            (
                "Chitwan",
                &[
                    "Bharatpur Metropolitan", "Kalika Municipality", "Khairahani Municipality",
                    "Madi Municipality", "Ratnanagar Municipality", "Rapti Municipality",
                    "Ichchhakamana",
                ],
            ),
        ],
    ),
    (
        "Gandaki Pradesh",
        &[
            (
                "Gorkha",
                &[
                    "Gorkha Municipality", "Palungtar Municipality", "Sulikot", "Siranchok",
                    "Ajirkot", "Tsum Nubri", "Dharche", "Bhimsen Thapa", "Sahid Lakhan", "Aarughat",
                    "Gandaki",
                ],
            ),
            ("Manang", &["Chame", "Nason", "Narfu", "Manang Ngisyang"]),
            (
                "Mustang",
                &[
                    "Gharpajhong", "Thasang", "Dalome", "Lo-Manthang", "Barhagaun Muktichhetra",
                ],
            ),
            (
                "Myagdi",
                &[
                    "Beni Municipality", "Annapurna", "Dhaulagiri", "Mangala", "Malika",
                    "Raghuganga",
                ],
            ),
            (
                "Parbat",
                &[
                    "Kushma Municipality", "Phalebas Municipality", "Jaljala", "Paiyun",
                    "Mahashila", "Modi", "Bihadi",
                ],
            ),
            (
                "Syangja",
                &[
                    "Galyang Municipality", "Chapakot Municipality", "Putalibazar Municipality",
                    "Bhirkot Municipality", "Waling Municipality", "Arjun Chaupari", "Aandhikhola",
                    "Kaligandaki", "Phedikhola", "Harinas", "Biruwa",
                ],
            ),
            ("Kaski", &["Pokhara Metropolitan", "Annapurna", "Machhapuchhre", "Madi", "Rupa"]),
            (
                "Lamjung",
                &[
                    "Besisahar Municipality", "Dordi", "Dudhpokhari", "Kwhlosothar", "Madhya Nepal",
                    "Marsyandi", "Rainas", "Sundarbazar Municipality",
                ],
            ),
            (
                "Tanahu",
                &[
                    "Bhanu Municipality", "Bhimad Municipality", "Byas Municipality",
                    "Shuklagandaki Municipality", "Anbukhaireni", "Devghat", "Bandipur", "Ghiring",
                    "Myagde", "Rishing",
                ],
            ),
            (
                "Nawalpur",
                &[
                    "Kawasoti Municipality", "Gaindakot Municipality", "Devchuli Municipality",
                    "Madhyabindu Municipality", "Baudikali", "Bulingtar", "Binayi Tribeni",
                    "Hupsekot",
                ],
            ),
            (
                "Baglung",
                &[
                    "Baglung Municipality", "Galkot Municipality", "Jaimuni Municipality",
                    "Dhorpatan Municipality", "Bareng", "Khathekhola", "Taman Khola", "Tara Khola",
                    "Nisikhola", "Badigad",
                ],
            ),
        ],
    ),
    (
        "Lumbini Pradesh",
        &[
            (
                "Gulmi",
                &[
                    "Musikot Municipality", "Resunga Municipality", "Isma", "Kaligandaki",
                    "Gulmi Darbar", "Satyawati", "Chandrakot", "Ruru", "Chatrakot", "Dhurkot",
                    "Madane", "Malika",
                ],
            ),
            (
                "Palpa",
                &[
                    "Tansen Municipality", "Rampur Municipality", "Rainadevi Chhahara", "Ribdikot",
                    "Purbakhola", "Rambha", "Tinau", "Nisdi", "Mathagadhi", "Bagnaskali",
                ],
            ),
            (
                "Rupandehi",
                &[
                    "Butwal Sub-Metropolitan", "Devdaha Municipality",
                    "Lumbini Sanskritik Municipality", "Sainamaina Municipality",
                    "Siddharthanagar Municipality", "Tilottama Municipality", "Gaidahawa",
                    "Kanchan", "Kotahimai", "Marchawari", "Mayadevi", "Omsatiya", "Rohini",
                    "Sammarimai", "Siyari", "Suddodhan",
                ],
            ),
            (
                "Kapilvastu",
                &[
                    "Kapilvastu Municipality", "Buddhabhumi Municipality", "Shivaraj Municipality",
                    "Maharajgunj Municipality", "Krishnanagar Municipality",
                    "Banganga Municipality", "Chandrauta", "Yashodhara", "Suddodhan", "Bijaynagar",
                ],
            ),
            (
                "Arghakhanchi",
                &[
                    "Sandhikharka Municipality", "Sitganga Municipality",
                    "Bhumikasthan Municipality", "Chhatradev", "Panini", "Malarani",
                ],
            ),
            (
                "Pyuthan",
                &[
                    "Pyuthan Municipality", "Sworgadwary Municipality", "Gaumukhi", "Mandavi",
                    "Sarumarani", "Mallarani", "Naubahini", "Jhimruk", "Airawati",
                ],
            ),
            (
                "Rolpa",
                &[
                    "Rolpa Municipality", "Runtigadhi", "Triveni", "Sunil Smriti", "Lungri",
                    "Sunchhahari", "Thawang", "Madi", "Gangadev", "Pariwartan",
                ],
            ),
            ("Eastern Rukum", &["Bhume", "Sisne", "Putha Uttarganga"]),
            (
                "Banke",
                &[
                    "Nepalgunj Sub-Metropolitan", "Kohalpur Municipality", "Rapti Sonari",
                    "Narainapur", "Duduwa", "Janaki", "Khajura", "Baijanath",
                ],
            ),
            (
                "Bardiya",
                &[
                    "Gulariya Municipality", "Madhuwan Municipality", "Rajapur Municipality",
                    "Thakurbaba Municipality", "Bansgadhi Municipality", "Barbardiya Municipality",
                    "Badhaiyatal", "Geruwa", "Bansagadhi",
                ],
            ),
            (
                "Western Rukum",
                &[
                    "Musikot Municipality", "Chaurjahari Municipality", "Aathbiskot Municipality",
                    "Banphikot", "Triveni", "Sani Bheri",
                ],
            ),
            (
                "Dang",
                &[
                    "Ghorahi Sub-Metropolitan", "Tulsipur Sub-Metropolitan", "Lamahi Municipality",
                    "Gadhawa", "Rajpur", "Shantinagar", "Rapti", "Babai", "Dangisharan",
                    "Banglachuli",
                ],
            ),
        ],
    ),
    (
        "Karnali Pradesh",
        &[
            (
                "Salyan",
                &[
                    "Sharada Municipality", "Bagchaur Municipality", "Bangad Kupinde Municipality",
                    "Kalimati", "Tribeni", "Kapurkot", "Chhatreshwari", "Kumakh", "Siddha Kumakh",
                    "Darma",
                ],
            ),
            (
                "Dolpa",
                &[
                    "Thuli Bheri Municipality", "Tripurasundari Municipality", "Dolpo Buddha",
                    "She Phoksundo", "Jagadulla", "Mudkechula", "Kaike", "Chharka Tangsong",
                ],
            ),
            (
                "Humla",
                &[
                    "Simkot", "Namkha", "Kharpunath", "Sarkegad", "Chankheli", "Adanchuli",
                    "Tanjakot",
                ],
            ),
            (
                "Jumla",
                &[
                    "Chandannath Municipality", "Kankasundari", "Sinja", "Hima", "Tila",
                    "Guthichaur", "Tatopani", "Patarasi",
                ],
            ),
            (
                "Kalikot",
                &[
                    "Khandachakra Municipality", "Raskot Municipality", "Tilagufa Municipality",
                    "Pachaljharana", "Sanni Triveni", "Narharinath", "Shubha Kalika", "Mahawai",
                    "Palata",
                ],
            ),
            ("Mugu", &["Chhayanath Rara Municipality", "Mugum Karmarong", "Soru", "Khatyad"]),
            (
                "Surkhet",
                &[
                    "Birendranagar Municipality", "Bheriganga Municipality",
                    "Gurbhakot Municipality", "Panchapuri Municipality", "Lekbeshi Municipality",
                    "Chaukune", "Barahatal", "Chingad", "Simta",
                ],
            ),
            (
                "Dailekh",
                &[
                    "Narayan Municipality", "Dullu Municipality",
                    "Chamunda Bindrasaini Municipality", "Aathabis Municipality", "Bhagawatimai",
                    "Gurans", "Dungeshwar", "Naumule", "Mahabu", "Bhairabi", "Thantikandh",
                ],
            ),
            (
                "Jajarkot",
                &[
                    "Bheri Municipality", "Chhedagad Municipality", "Junichande", "Kuse", "Barekot",
                    "Shiwalaya", "Nalagad",
                ],
            ),
        ],
    ),
    (
        "Sudurpashchim Pradesh",
        &[
            (
                "Bajura",
                &[
                    "Badimalika Municipality", "Triveni Municipality", "Budhiganga Municipality",
                    "Budhinanda Municipality", "Gaumul", "Jagannath", "Swami Kartik Khapar",
                    "Chhededaha", "Himali",
                ],
            ),
            (
                "Bajhang",
                &[
                    "Jaya Prithvi Municipality", "Bungal Municipality", "Talkot", "Masta",
                    "Khaptadchhanna", "Thalara", "Bitthadchir", "Surma", "Chhabis Pathibhera",
                    "Durgathali", "Kedarsyu", "Saipal",
                ],
            ),
            (
                "Achham",
                &[
                    "Mangalsen Municipality", "Kamalbazar Municipality", "Sanphebagar Municipality",
                    "Panchadewal Binayak Municipality", "Chaurpati", "Mellekh",
                    "Bannigadhi Jayagadh", "Ramaroshan", "Dhakari", "Turmakhand",
                ],
            ),
            (
                "Doti",
                &[
                    "Dipayal Silgadhi Municipality", "Shikhar Municipality", "Purbichauki",
                    "Badikedar", "Jorayal", "Sayal", "Aadarsha", "K I Singh", "Bogtan Phudsil",
                ],
            ),
            (
                "Kailali",
                &[
                    "Dhangadhi Sub-Metropolitan", "Tikapur Municipality", "Ghodaghodi Municipality",
                    "Lamki Chuha Municipality", "Bhajani Municipality", "Godawari Municipality",
                    "Gauriganga Municipality", "Janaki", "Bardagoriya", "Mohanyal", "Kailari",
                    "Joshipur", "Chure",
                ],
            ),
            (
                "Kanchanpur",
                &[
                    "Bhimdatta Municipality", "Punarbas Municipality", "Bedkot Municipality",
                    "Mahakali Municipality", "Shuklaphanta Municipality", "Belauri Municipality",
                    "Krishnapur Municipality", "Beldandi", "Laljhadi",
                ],
            ),
            (
                "Dadeldhura",
                &[
                    "Amargadhi Municipality", "Parashuram Municipality", "Aalitaal", "Bhageshwar",
                    "Navadurga", "Ajaymeru", "Ganyapadhura",
                ],
            ),
            (
                "Baitadi",
                &[
                    "Dasharathchanda Municipality", "Patan Municipality", "Melauli Municipality",
                    "Purchaudi Municipality", "Surna", "Sigas", "Shivanath", "Pancheshwar",
                    "Dogadakedar", "Dilasaini",
                ],
            ),
            (
                "Darchula",
                &[
                    "Mahakali Municipality", "Shailyashikhar Municipality", "Malikarjun",
                    "Apihimal", "Duhun", "Naugad", "Marma", "Lekam", "Vyans",
                ],
            ),
        ],
    ),
];
